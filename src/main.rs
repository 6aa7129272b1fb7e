use clap::{value_t, App, Arg, ArgMatches};
use log::debug;
use packet_dump::{Config, DebugFlag, Error, HexDumpLogger, PacketKind};
use std::fs::{self, OpenOptions};
use std::io::{self, Read, Write};
use std::process;

fn main() {
    env_logger::init();

    let matches = cmdline_configuration().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("packet-dump: {}", err);
        process::exit(1);
    }
}

fn cmdline_configuration() -> App<'static, 'static> {
    App::new("packet-dump")
        .about("Print packet bytes as a hex dump")
        .version(env!("CARGO_PKG_VERSION"))
        .args(&[
            Arg::with_name("hex")
                .index(1)
                .multiple(true)
                .help("Packet bytes as hex text; whitespace and 0x prefixes are ignored"),
            Arg::with_name("file")
                .short("f")
                .long("file")
                .takes_value(true)
                .conflicts_with("hex")
                .help("Read raw packet bytes from a file instead of stdin"),
            Arg::with_name("kind")
                .short("k")
                .long("kind")
                .takes_value(true)
                .possible_values(&["send", "recv", "trap"])
                .case_insensitive(true)
                .help("Dump as a send, recv or trap packet, ignoring the debug flag"),
            Arg::with_name("label")
                .short("l")
                .long("label")
                .takes_value(true)
                .conflicts_with("kind")
                .help("Label of the dump record [default: Packet Data]"),
            Arg::with_name("start")
                .short("s")
                .long("start")
                .takes_value(true)
                .conflicts_with("kind")
                .validator(is_index)
                .help("Index of the first byte to dump"),
            Arg::with_name("count")
                .short("n")
                .long("count")
                .takes_value(true)
                .validator(is_index)
                .help("Number of bytes to dump [default: rest of the input]"),
            Arg::with_name("debug")
                .long("debug")
                .takes_value(true)
                .help("Initial state of the debug flag, overrides PACKET_DUMP_DEBUG"),
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("Append dumps to this file instead of stdout, overrides PACKET_DUMP_OUTPUT"),
        ])
}

fn is_index(value: String) -> Result<(), String> {
    value
        .parse::<usize>()
        .map(|_| ())
        .map_err(|_| format!("expected a non-negative integer, found {:?}", value))
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let config = Config::from_env(&config_overrides(matches))?;
    debug!("Loaded configuration {:?}", config);

    let flag = DebugFlag::global();
    flag.set(config.debug);
    let logger = HexDumpLogger::new(open_output(&config)?, flag);

    let bytes = read_input(matches)?;
    dump(&logger, matches, &bytes)
}

/// Command line values that take precedence over the environment.
fn config_overrides<'a>(matches: &'a ArgMatches) -> Vec<(&'static str, &'a str)> {
    ["debug", "output"]
        .iter()
        .filter_map(|&key| matches.value_of(key).map(|value| (key, value)))
        .collect()
}

fn open_output(config: &Config) -> Result<Box<dyn Write + Send>, Error> {
    match config.output {
        Some(ref path) => {
            debug!("Appending dumps to {}", path.display());
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

fn dump<W: Write>(
    logger: &HexDumpLogger<W>,
    matches: &ArgMatches,
    bytes: &[u8],
) -> Result<(), Error> {
    let count = |start: usize| {
        if matches.is_present("count") {
            value_t!(matches, "count", usize).unwrap_or_else(|e| e.exit())
        } else {
            bytes.len().saturating_sub(start)
        }
    };

    if let Some(kind) = matches.value_of("kind") {
        let kind: PacketKind = kind.parse()?;
        logger.log_packet(kind, bytes, count(0))
    } else {
        let start = if matches.is_present("start") {
            value_t!(matches, "start", usize).unwrap_or_else(|e| e.exit())
        } else {
            0
        };
        let label = matches.value_of("label").unwrap_or("Packet Data");
        logger.log_bytes(label, bytes, start, count(start))
    }
}

fn read_input(matches: &ArgMatches) -> Result<Vec<u8>, Error> {
    if let Some(words) = matches.values_of("hex") {
        return decode_hex(words);
    }
    if let Some(path) = matches.value_of("file") {
        debug!("Reading packet bytes from {}", path);
        return Ok(fs::read(path)?);
    }
    let mut bytes = Vec::new();
    io::stdin().read_to_end(&mut bytes)?;
    Ok(bytes)
}

fn decode_hex<'a>(words: impl Iterator<Item = &'a str>) -> Result<Vec<u8>, Error> {
    let digits: String = words
        .flat_map(str::split_whitespace)
        .map(|word| word.replace("0x", "").replace("0X", ""))
        .collect();
    Ok(hex::decode(digits)?)
}
