extern crate clap;
extern crate image;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use image::bmp::BMPEncoder;
use image::ColorType;
use mandelbrot::{EscapeParams, Renderer, Viewport};
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_positive(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(v) => {
            if v > 0.0 && v.is_finite() {
                Ok(())
            } else {
                Err(err.to_string())
            }
        }
        Err(_) => Err(err.to_string()),
    }
}

const OUTPUT: &str = "output";
const LEFTLOWER: &str = "leftlower";
const RIGHTUPPER: &str = "rightupper";
const DENSITY: &str = "density";
const ITERATIONS: &str = "iterations";
const RADIUS: &str = "radius";
const HUEFACTOR: &str = "hue-factor";
const THREADS: &str = "threads";
const PREVIEW: &str = "preview";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandel")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Mandelbrot set renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required_unless(PREVIEW)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file (24-bit BMP)"),
        )
        .arg(
            Arg::with_name(LEFTLOWER)
                .required(false)
                .long(LEFTLOWER)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-2,-1")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse left lower corner"))
                .help("Left lower corner of the plane window"),
        )
        .arg(
            Arg::with_name(RIGHTUPPER)
                .required(false)
                .long(RIGHTUPPER)
                .short("r")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1,1")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse right upper corner"))
                .help("Right upper corner of the plane window"),
        )
        .arg(
            Arg::with_name(DENSITY)
                .required(false)
                .long(DENSITY)
                .short("d")
                .takes_value(true)
                .default_value("2000")
                .validator(|s| {
                    validate_positive(&s, "Pixel density must be a positive number of pixels per unit")
                })
                .help("Pixels per unit of plane length"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("1000")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Iteration cap before a point is declared bounded"),
        )
        .arg(
            Arg::with_name(RADIUS)
                .required(false)
                .long(RADIUS)
                .takes_value(true)
                .default_value("2")
                .validator(|s| validate_positive(&s, "Escape radius must be a positive number"))
                .help("Escape radius"),
        )
        .arg(
            Arg::with_name(HUEFACTOR)
                .required(false)
                .long(HUEFACTOR)
                .takes_value(true)
                .default_value("5")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        359,
                        "Could not parse hue factor",
                        "Hue factor must be between 1 and 359",
                    )
                })
                .help("Degrees of hue rotation per iteration of escape velocity"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of render threads"),
        )
        .arg(
            Arg::with_name(PREVIEW)
                .required(false)
                .long(PREVIEW)
                .takes_value(false)
                .help("Print a coarse ASCII rendering to stdout instead of writing a file"),
        )
        .get_matches()
}

fn write_image(outfile: &str, pixels: &[u8], bounds: (u32, u32)) -> Result<(), std::io::Error> {
    let path = Path::new(outfile);
    let mut output = File::create(&path)?;
    let mut encoder = BMPEncoder::new(&mut output);
    encoder.encode(pixels, bounds.0, bounds.1, ColorType::RGB(8))?;
    Ok(())
}

fn main() {
    let matches = args();
    let (x_min, y_min) = parse_pair(matches.value_of(LEFTLOWER).unwrap(), ',')
        .expect("Error parsing left lower corner");
    let (x_max, y_max) = parse_pair(matches.value_of(RIGHTUPPER).unwrap(), ',')
        .expect("Error parsing right upper corner");
    let density =
        f64::from_str(matches.value_of(DENSITY).unwrap()).expect("Could not parse pixel density");
    let iterations = u32::from_str(matches.value_of(ITERATIONS).unwrap())
        .expect("Could not parse iteration count");
    let radius =
        f64::from_str(matches.value_of(RADIUS).unwrap()).expect("Could not parse escape radius");
    let hue_factor =
        u32::from_str(matches.value_of(HUEFACTOR).unwrap()).expect("Could not parse hue factor");
    let threads =
        usize::from_str(matches.value_of(THREADS).unwrap()).expect("Could not parse thread count");

    let viewport = match Viewport::new(x_min, x_max, y_min, y_max, density) {
        Ok(viewport) => viewport,
        Err(e) => {
            eprintln!("Bad configuration: {}", e);
            std::process::exit(1);
        }
    };

    let params = EscapeParams {
        max_iterations: iterations,
        max_radius: radius,
    };
    let renderer = Renderer::new(viewport, params, hue_factor);

    if matches.is_present(PREVIEW) {
        print!("{}", renderer.ascii_preview());
        return;
    }

    let pixels = if threads > 1 {
        renderer.render_threaded(threads)
    } else {
        renderer.render()
    };

    let outfile = matches.value_of(OUTPUT).unwrap();
    if let Err(e) = write_image(outfile, &pixels, (viewport.width(), viewport.height())) {
        eprintln!("Could not write {}: {}", outfile, e);
        std::process::exit(1);
    }
}
