//! Command: print version information.

/// Print the heroicons version to stdout.
pub fn run() {
    println!("heroicons {}", crate::VERSION);
}
