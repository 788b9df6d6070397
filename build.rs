use std::{
    env,
    fs::{self, File},
    io::{self, BufWriter, Write},
};

// Turn every YAML file in a catalog directory into an entry in a static map
// keyed by file stem. The generated files are pulled in by the layout and
// scheme registries.
fn embed_catalog(out_dir: &str, directory: &str, static_name: &str) -> io::Result<()> {
    let output_path = format!("{out_dir}/{directory}.rs");
    let mut output_file = BufWriter::new(File::create(output_path)?);
    output_file.write_all(b"use std::collections::BTreeMap as Map;\n")?;
    output_file.write_all(b"use once_cell::sync::Lazy;\n")?;
    output_file.write_all(
        format!("static {static_name}: Lazy<Map<&'static str, &'static [u8]>> = Lazy::new(|| Map::from([\n")
            .as_bytes(),
    )?;

    let mut paths = fs::read_dir(directory)?.collect::<io::Result<Vec<_>>>()?;
    paths.sort_by_key(|e| e.path());
    for entry in paths {
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            panic!("found non file in {directory} directory");
        }
        let path = entry.path();
        let contents = fs::read(&path)?;
        let file_name = path.file_name().unwrap().to_string_lossy();
        let name = file_name.split_once('.').unwrap().0;
        output_file.write_all(format!("(\"{name}\", {contents:?}.as_slice()),\n").as_bytes())?;
    }
    output_file.write_all(b"]));\n")?;

    // Rebuild if anything changes.
    println!("cargo:rerun-if-changed={directory}");
    Ok(())
}

fn main() -> io::Result<()> {
    let out_dir = env::var("OUT_DIR").unwrap();
    embed_catalog(&out_dir, "layouts", "LAYOUTS")?;
    embed_catalog(&out_dir, "schemes", "SCHEMES")?;
    Ok(())
}
