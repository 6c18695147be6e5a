use nu_algebra::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

const TOLERANCE: f64 = 1e-6;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: InputData,
    params: Params,
    expected: Option<Expected>,
    #[serde(skip_deserializing)]
    result: Option<ReconcileResult<f64>>,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    values: Vec<f64>,
    uncertainties: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Params {
    tension_threshold: f64,
    #[serde(default)]
    record_steps: bool,
}

#[derive(Debug, Deserialize, Serialize)]
struct Expected {
    value: f64,
    uncertainty: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let input_dir = Path::new("../data");
    let output_dir = Path::new("../output/nu_algebra");

    if !input_dir.exists() {
        eprintln!("Input directory {:?} does not exist.", input_dir);
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    let mut failures = 0;
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            println!("Processing {:?}", path.file_name().unwrap_or_default());
            if !process_file(&path, output_dir)? {
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} fixture(s) did not match the expected aggregate", failures).into());
    }
    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<bool, Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    let mut builder = Reconcile::new().tension_threshold(data.params.tension_threshold);
    if data.params.record_steps {
        builder = builder.record_steps();
    }
    let processor = builder.build()?;

    let result = processor.fit(&data.input.values, &data.input.uncertainties)?;
    println!("{}", result);

    let matches = match &data.expected {
        Some(expected) => {
            let ok = (result.aggregate.n() - expected.value).abs() < TOLERANCE
                && (result.aggregate.u() - expected.uncertainty).abs() < TOLERANCE;
            if !ok {
                eprintln!(
                    "{}: expected {} ± {}, got {}",
                    data.name, expected.value, expected.uncertainty, result.aggregate
                );
            }
            ok
        }
        None => true,
    };

    data.result = Some(result);

    let file_name = input_path.file_name().ok_or("fixture path has no file name")?;
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_dir.join(file_name), output_json)?;

    Ok(matches)
}
