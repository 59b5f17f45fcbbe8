use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(serde::Deserialize)]
struct SymbolData {
    sets: Vec<SymbolSet>,
}

#[derive(serde::Deserialize)]
struct SymbolSet {
    name: String,
    doc: String,
    entries: Vec<String>,
}

fn main() {
    println!("cargo:rerun-if-changed=data/symbols.json");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    generate_symbol_sets(&out_dir);
}

fn generate_symbol_sets(out_dir: &str) {
    let json_data = fs::read_to_string("data/symbols.json").expect("Failed to read symbols.json");
    let data: SymbolData =
        serde_json::from_str(&json_data).expect("Failed to parse symbols.json");

    let dest_path = Path::new(out_dir).join("generated_symbol_sets.rs");
    let file = File::create(&dest_path).expect("Failed to create generated_symbol_sets.rs");
    let mut file = BufWriter::new(file);

    writeln!(&mut file, "// Auto-generated file - do not edit manually").unwrap();
    writeln!(&mut file, "// Generated from data/symbols.json").unwrap();

    for set in &data.sets {
        let mut phf_set = phf_codegen::Set::<&str>::new();
        let mut seen = std::collections::HashSet::new();
        for entry in &set.entries {
            if seen.insert(entry.as_str()) {
                phf_set.entry(entry.as_str());
            }
        }
        writeln!(&mut file).unwrap();
        writeln!(&mut file, "/// {}", set.doc).unwrap();
        writeln!(
            &mut file,
            "pub static {}: phf::Set<&'static str> = {};",
            set.name,
            phf_set.build()
        )
        .unwrap();
    }

    writeln!(&mut file).unwrap();
    writeln!(
        &mut file,
        "/// Every generated set, by name, in declaration order."
    )
    .unwrap();
    writeln!(
        &mut file,
        "pub static ALL_SETS: &[(&str, &phf::Set<&'static str>)] = &["
    )
    .unwrap();
    for set in &data.sets {
        writeln!(&mut file, "    ({:?}, &{}),", set.name, set.name).unwrap();
    }
    writeln!(&mut file, "];").unwrap();
}
