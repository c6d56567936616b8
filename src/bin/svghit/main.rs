use serde::Serialize;

use svghit::{
    hit_test_with_options, CurveHandling, HitTestOptions, HitTestResult, LoadingError, Point,
    RegionMap, Session,
};

use std::path::PathBuf;

mod cli;

#[derive(Debug)]
pub struct Error(String);

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

macro_rules! impl_error_from {
    ($err:ty) => {
        impl From<$err> for Error {
            fn from(e: $err) -> Self {
                Self(format!("{e}"))
            }
        }
    };
}

impl_error_from!(LoadingError);
impl_error_from!(serde_json::Error);

macro_rules! error {
    ($($arg:tt)*) => (Error(std::format!($($arg)*)));
}

#[derive(Debug)]
enum Target {
    Path(String),
    Regions(PathBuf),
}

#[derive(Debug)]
struct Tester {
    target: Target,
    points: Vec<Point>,
    tolerance: f64,
    options: HitTestOptions,
    all: bool,
    json: bool,
    session: Session,
}

impl Tester {
    pub fn run(self) -> Result<(), Error> {
        match self.target {
            Target::Path(ref data) => {
                for point in &self.points {
                    let result = hit_test_with_options(data, point.x, point.y, &self.options);
                    self.print_path_result(*point, &result)?;
                }
            }

            Target::Regions(ref file) => {
                let map = RegionMap::from_file(file, self.session.clone(), self.options)?;

                for point in &self.points {
                    if self.all {
                        self.print_all_regions(&map, *point)?;
                    } else {
                        self.print_selected_region(&map, *point)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn print_path_result(&self, point: Point, result: &HitTestResult) -> Result<(), Error> {
        if self.json {
            let report = PathReport {
                point: [point.x, point.y],
                result: *result,
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            println!("inside={} distance={}", result.inside, result.distance);
        }

        Ok(())
    }

    fn print_selected_region(&self, map: &RegionMap, point: Point) -> Result<(), Error> {
        let hit = map.hit(point, self.tolerance);

        if self.json {
            let report = SelectionReport {
                point: [point.x, point.y],
                region: hit.map(|hit| hit.id),
                result: hit.map(|hit| hit.result),
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            match hit {
                Some(hit) => println!(
                    "{} inside={} distance={}",
                    hit.id, hit.result.inside, hit.result.distance
                ),
                None => println!("none"),
            }
        }

        Ok(())
    }

    fn print_all_regions(&self, map: &RegionMap, point: Point) -> Result<(), Error> {
        let results = map.hit_all(point);

        if self.json {
            let report = AllRegionsReport {
                point: [point.x, point.y],
                regions: results
                    .into_iter()
                    .map(|(region, result)| RegionResult { region, result })
                    .collect(),
            };
            println!("{}", serde_json::to_string(&report)?);
        } else {
            for (id, result) in results {
                println!("{} inside={} distance={}", id, result.inside, result.distance);
            }
        }

        Ok(())
    }
}

// JSON output, one document per point.  Infinite distances come out as null.

#[derive(Serialize)]
struct PathReport {
    point: [f64; 2],
    #[serde(flatten)]
    result: HitTestResult,
}

#[derive(Serialize)]
struct SelectionReport<'a> {
    point: [f64; 2],
    region: Option<&'a str>,
    #[serde(flatten)]
    result: Option<HitTestResult>,
}

#[derive(Serialize)]
struct RegionResult<'a> {
    region: &'a str,
    #[serde(flatten)]
    result: HitTestResult,
}

#[derive(Serialize)]
struct AllRegionsReport<'a> {
    point: [f64; 2],
    regions: Vec<RegionResult<'a>>,
}

fn print_version() {
    print!("{}", cli::build_cli().render_version());
}

fn parse_args() -> Result<Tester, Error> {
    let matches = cli::build_cli().get_matches();

    if matches.get_flag("version") {
        print_version();
        std::process::exit(0);
    }

    let target = match (
        matches.get_one::<String>("path"),
        matches.get_one::<PathBuf>("regions"),
    ) {
        (Some(data), None) => Target::Path(data.clone()),
        (None, Some(file)) => Target::Regions(file.clone()),
        _ => {
            return Err(error!(
                "Please specify either --path or --regions to test points against."
            ))
        }
    };

    let points: Vec<Point> = matches
        .get_many::<Point>("point")
        .map(|values| values.copied().collect())
        .unwrap_or_default();

    if points.is_empty() {
        return Err(error!("Please specify at least one --point to test."));
    }

    let tolerance = *matches
        .get_one::<f64>("tolerance")
        .expect("already provided default_value");

    let curves = *matches
        .get_one::<CurveHandling>("curves")
        .expect("already provided default_value");

    let session = if matches.get_flag("log") {
        Session::with_logging(true)
    } else {
        Session::new()
    };

    Ok(Tester {
        target,
        points,
        tolerance,
        options: HitTestOptions { curves },
        all: matches.get_flag("all"),
        json: matches.get_flag("json"),
        session,
    })
}

fn main() {
    if let Err(e) = parse_args().and_then(|tester| tester.run()) {
        std::eprintln!("{e}");
        std::process::exit(1);
    }
}
