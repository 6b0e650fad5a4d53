#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        println!("[Info] {}", format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!("[Warning] {}", format!($($arg)*))
    };
}

pub trait ProjectError: std::error::Error
{
    fn title(&self) -> String;

    /// Framed report of the error, as printed by [`ProjectError::handle`]
    fn report(&self) -> String
    {
        let rule = format!("{:->50}", '-');
        format!("{rule}\n[{} Error] {}\n{rule}", self.title(), self)
    }

    /// Function for default handling an error
    ///
    /// Prints the framed error message to stderr
    fn handle(&self) { eprintln!("{}", self.report()); }
}
