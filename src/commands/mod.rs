pub mod check;
pub mod setup;

/// Width of the `=` rules framing console banners
pub const RULE_WIDTH: usize = 70;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}
