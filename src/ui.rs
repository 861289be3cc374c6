/// Behaviour for displaying output to the user.
pub trait UserInterface {
    /// Display a (possibly multi-line) message.
    fn print(&self, message: String);
}

/// Prints to stdout.
#[derive(Debug, Default)]
pub struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }
}
