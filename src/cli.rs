use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "sluice",
    version,
    about = "Validate a local file and dispatch it to the content-processing service"
)]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    /// File to validate and dispatch.
    pub path: String,
    /// Optional free-text instruction forwarded to the processing service.
    pub instruction: Vec<String>,
}

impl Cli {
    pub fn instruction_text(&self) -> Option<String> {
        if self.instruction.is_empty() {
            None
        } else {
            Some(self.instruction.join(" "))
        }
    }
}
