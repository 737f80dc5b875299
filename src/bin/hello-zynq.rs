use clap::Parser;
use hello_zynq::{Greeter, Timestamp};
use std::{ffi::OsString, io, iter::once};

#[derive(Debug, Parser)]
#[clap(
    about = "Example package from ZUR (ZynqOS User Repository)",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Opt {
    /// Name to greet, used verbatim
    #[clap(parse(from_os_str), allow_hyphen_values = true)]
    name: Option<OsString>,

    /// Arguments after the name are ignored
    #[clap(parse(from_os_str), allow_hyphen_values = true, hide = true)]
    rest: Vec<OsString>,
}

impl Opt {
    /// Every token after the program name is a value, never a flag.
    ///
    /// An escape is put in front of the arguments so that clap does not
    /// interpret `-x`, `--help` or even a literal `--`.
    fn parse_verbatim<I>(args: I) -> clap::Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        let program = args.next().unwrap_or_else(|| OsString::from("hello-zynq"));
        Opt::try_parse_from(once(program).chain(once(OsString::from("--"))).chain(args))
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let Opt { name, rest } = Opt::parse_verbatim(std::env::args_os())?;
    if !rest.is_empty() {
        log::debug!("Ignore {} extra argument(s)", rest.len());
    }
    let greeter = Greeter::new(name.map(|name| name.to_string_lossy().into_owned()));

    let now = Timestamp::now();
    let stdout = io::stdout();
    greeter.write_to(&mut stdout.lock(), &now)?;
    Ok(())
}
