use structopt::StructOpt;

#[derive(Debug, StructOpt, Clone)]
#[structopt(name = "Source")]
pub enum Source {
    #[structopt(name = "demo")]
    Demo {
        #[structopt(short = "s", long = "seed")]
        seed: Option<u64>,
    },

    #[structopt(name = "csv")]
    Csv {
        #[structopt(short = "g", long = "grid-path")]
        grid_path: String,

        #[structopt(short = "d", long = "distribution-path")]
        distribution_path: String,
    },
}

#[derive(StructOpt, Debug, Clone)]
pub struct Parameters {
    #[structopt(subcommand)]
    pub source: Source,

    #[structopt(short = "o", long = "output-path", default_value = "dashboard.svg")]
    pub output_path: String,

    #[structopt(short = "r", long = "pie-radius", default_value = "50")]
    pub pie_radius: f64,

    #[structopt(long = "premium")]
    pub premium: bool,
}

impl Parameters {
    pub fn demo_seed(&self) -> Option<u64> {
        match &self.source {
            Source::Demo { seed } => *seed,
            Source::Csv { .. } => None,
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            source: Source::Demo { seed: Some(42) },
            output_path: "dashboard.svg".to_string(),
            pie_radius: 50.0,
            premium: false,
        }
    }
}
