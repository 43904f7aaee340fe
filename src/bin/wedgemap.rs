use std::fs;
use std::io::Write;

use env_logger::Env;
use log::*;
use structopt::StructOpt;

use wedgemap::{wedgemap, Parameters, SessionCheck, User};

/// CLI stand-in for the externally-owned session state: the invoking OS
/// user counts as signed in.
struct EnvSession;

impl SessionCheck for EnvSession {
    fn current_user(&self) -> Option<User> {
        std::env::var("USER").ok().map(|name| User {
            id: name.clone(),
            name,
        })
    }
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{} [wedgemap]: {}", record.level(), record.args()))
        .init();

    let params: Parameters = Parameters::from_args();
    debug!("Parameters: {:?}", params);

    let output_path = params.output_path.clone();
    let document = wedgemap(params, &EnvSession).expect("dashboard rendering failed");
    fs::write(&output_path, document).expect("could not write dashboard");
    info!("wrote {}", output_path);
}
