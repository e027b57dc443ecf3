// Create the Error, ErrorKind, ResultExt, and Result types
// Result is a typedef of std `Result` with the error type our own `Error`
use error_chain::error_chain;

error_chain! {
    errors {
        InvalidSize(size: usize) {
            description("invalid maze size")
            display("invalid maze size {}, a maze needs at least one cell", size)
        }
        OutOfBounds(x: u32, y: u32, size: usize) {
            description("grid coordinate out of bounds")
            display("coordinate ({}, {}) is outside a {}x{} grid", x, y, size, size)
        }
        InvalidConfig(reason: String) {
            description("invalid maze configuration")
            display("invalid maze configuration: {}", reason)
        }
    }
}
