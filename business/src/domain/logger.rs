/// Logging port used by the use cases.
///
/// Keeps the pipeline independent from the concrete subscriber wired by the binary.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
