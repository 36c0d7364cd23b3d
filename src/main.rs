fn main() {
    if let Err(err) = fhir_structure_renderer::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
