use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Track-stream file to process, relative to the input root.
    /// When omitted, available streams are listed instead.
    #[arg(long)]
    pub stream: Option<String>,

    /// Root directory for track-stream input files
    #[arg(long, env = "CROSSING_COUNTER_INPUT_ROOT")]
    pub input_root: String,

    /// Root directory for output artifacts
    #[arg(long, env = "CROSSING_COUNTER_OUTPUT_ROOT")]
    pub output_root: String,

    /// Counting-line configuration file, relative to the input root
    #[arg(long, default_value = "counting_line.json")]
    pub line_config: String,

    /// Frame rate of the source video, used to derive event timestamps
    #[arg(long, default_value_t = 30.0)]
    pub fps: f64,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
