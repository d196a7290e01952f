pub mod check;
pub mod compare;
pub mod decompose;
pub mod sort;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
