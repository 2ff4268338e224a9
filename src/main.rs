extern crate clap;
extern crate pretty_env_logger;
extern crate termcolor;
extern crate tokio;

use clap::{crate_description, crate_name, Command};
use pretty_env_logger::init_timed;
use std::{io::Write, process::exit};
use termcolor::{Color, ColorChoice, StandardStream, WriteColor};

#[macro_use]
mod color;
mod command {
    pub mod push;
}

#[allow(unused_must_use)]
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_timed();
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    Command::new(crate_name!())
        .about(crate_description!())
        .version(get_version!("version"))
        .long_version(get_version!("long_version"))
        .get_matches();
    let result = command::push::push(&mut stdout).await;
    if let Err(e) = result {
        write_error!(&mut stdout, "Error", "{}", e);
        stdout.reset();
        exit(1);
    }
    stdout.reset();
}
