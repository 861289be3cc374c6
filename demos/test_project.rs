use paramcli::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let defaults = ParameterCollection::new()
        .with_parameter(Parameter::new("input", "").with_info("description", "The file to read.")?)?
        .with_parameter(
            Parameter::new("output", "test.mkv").with_info("description", "The file to write.")?,
        )?
        .with("volume", 1.0f32)?
        .with_parameter(
            Parameter::new("sleepFor", 1000)
                .with_info("description", "Milliseconds to sleep, if asked.")?,
        )?
        .with("shouldSleep", false)?;

    let parameters =
        defaults.with_console_arguments(std::env::args().skip(1), &MergeOptions::default())?;

    println!("The default parameters: {defaults}");
    println!();
    println!("Parameters with values gotten from arguments: {parameters}");
    TableRenderer::new(&parameters, TableOptions::default()).print(&ConsoleInterface::default());
    Ok(())
}
