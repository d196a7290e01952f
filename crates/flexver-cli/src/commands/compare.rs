use anstream::println;
use flexver::vectors::ordering_symbol;
use owo_colors::OwoColorize;
use tracing::debug;

/// Prints the two versions with the comparison between them, in test vector
/// format.
pub fn compare(left: &str, right: &str) {
    let ordering = flexver::compare(left, right);
    debug!(?ordering, "Compared {left:?} with {right:?}");

    println!("{left} {} {right}", ordering_symbol(ordering).bold());
}
