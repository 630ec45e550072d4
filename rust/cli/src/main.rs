use std::io;
use std::io::BufRead;

fn main() {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let code = ringgame_cli::run(
        std::env::args(),
        &mut io::stdout(),
        &mut io::stderr(),
        &mut input as &mut dyn BufRead,
    );
    std::process::exit(code);
}
