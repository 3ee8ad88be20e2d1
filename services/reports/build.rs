use vergen::EmitBuilder;

fn main() {
    // The rustc version ends up in the User-Agent sent to MWS.
    EmitBuilder::builder()
        .rustc_semver()
        .emit()
        .expect("Unable to generate build metadata");
}
