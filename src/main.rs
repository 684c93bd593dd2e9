use svg2points::{CoordinatePair, Error, Initializer};

pub const HELP: &str = "svg2points

USAGE:
    svg2points [OPTIONS] [INPUT]

OPTIONS:
    -h, --help\t\t\tPrint this message
    -s, --scale <SCALE>\t\tScale factor applied to every point (default: 0.0028)
    -o, --offset <X,Y>\t\tOffset added after scaling (default: 0,0.05)

Reads an SVG file (or stdin if INPUT is omitted), takes the path inside its
first group and prints the centered points as an initializer list.

Note: the X offset is applied to both coordinates.";

fn parse_scale(value: Option<String>) -> Result<f64, String> {
    let value = value.ok_or("Missing value for --scale")?;
    value
        .parse()
        .map_err(|e| format!("Invalid scale {:?}: {}", value, e))
}

fn parse_offset(value: Option<String>) -> Result<CoordinatePair, String> {
    let value = value.ok_or("Missing value for --offset")?;
    let mut parts = value.splitn(2, ',').map(str::trim);
    match (parts.next(), parts.next()) {
        (Some(x), Some(y)) => {
            let x = x
                .parse()
                .map_err(|e| format!("Invalid offset {:?}: {}", value, e))?;
            let y = y
                .parse()
                .map_err(|e| format!("Invalid offset {:?}: {}", value, e))?;
            Ok(CoordinatePair::new(x, y))
        }
        _ => Err(format!("Invalid offset {:?}: expected X,Y", value)),
    }
}

fn main() {
    fn inner() -> Result<(), Box<dyn std::error::Error>> {
        env_logger::init();

        let mut input = None;
        let mut initializer = Initializer::default();

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    println!("{}", HELP);
                    return Ok(());
                }
                "-s" | "--scale" => initializer.scale = parse_scale(args.next())?,
                "-o" | "--offset" => initializer.offset = parse_offset(args.next())?,
                _ => {
                    input = Some(arg);
                }
            }
        }

        let svg = if let Some(input) = input {
            std::fs::read_to_string(&input)
                .map_err(|e| format!("Could not read {:?}: {}", input, Error::Io(e)))?
        } else {
            let mut buffer = String::new();
            std::io::Read::read_to_string(&mut std::io::stdin(), &mut buffer).map_err(Error::Io)?;
            buffer
        };

        let points = svg2points::parse(&svg)?;
        log::debug!("Converted {} points", points.len());

        let stdout = std::io::stdout();
        initializer.write_to(&points, &mut stdout.lock())?;

        Ok(())
    }

    if let Err(e) = inner() {
        eprintln!("{}", e);
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scale() {
        assert_eq!(parse_scale(Some("0.5".into())), Ok(0.5));
        assert!(parse_scale(Some("abc".into())).is_err());
        assert!(parse_scale(None).is_err());
    }

    #[test]
    fn test_parse_offset() {
        assert_eq!(
            parse_offset(Some("1.5, -2".into())),
            Ok(CoordinatePair::new(1.5, -2.0))
        );
        assert!(parse_offset(Some("1.5".into())).is_err());
        assert!(parse_offset(Some("1,x".into())).is_err());
        assert!(parse_offset(None).is_err());
    }
}
