use std::env;
use std::fs;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 5] = [
    "Name Experiment",
    "Epoch",
    "Training Loss",
    "Validation Loss",
    "Validation Accuracy",
];

const SAMPLE_CSV: &str = "\
Name Experiment,Epoch,Training Loss,Validation Loss,Validation Accuracy,Evaluation Accuracy,Evaluation Precision,Evaluation F1
Sample,1,0.9,1.0,0.55,0.80,0.78,0.79
Sample,2,0.5,0.7,0.68,0.80,0.78,0.79
";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("experiments.csv");

    // Copy the experiment log into OUT_DIR for include_str. A header that is
    // missing a required column fails the build instead of the page load.
    let src = Path::new("../fixtures/experiments.csv");
    if src.exists() {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(src)
            .expect("Failed to open experiments.csv");
        let headers = rdr.headers().expect("experiments.csv has no header row").clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                panic!("experiments.csv is missing column `{}`", column);
            }
        }
        fs::copy(src, &dest).unwrap();
    } else {
        fs::write(&dest, SAMPLE_CSV).unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/experiments.csv");
}
