use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/workflows.json");
    let synonyms_path = Path::new("catalogs/synonyms.json");

    let catalog = read_json(catalog_path, "CATALOG");
    validate_catalog_structure(&catalog);

    let synonyms = read_json(synonyms_path, "SYNONYMS");
    validate_synonym_structure(&synonyms);

    set_build_dependencies();
}

fn read_json(path: &Path, label: &str) -> serde_json::Value {
    // Ensure the file exists at build time
    assert!(
        path.exists(),
        "\n\n{label} BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the file before building.\n",
        path.display()
    );

    let contents = std::fs::read_to_string(path).unwrap_or_else(|e| {
        panic!(
            "\n\n{label} BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            path.display()
        );
    });

    let value: serde_json::Value = serde_json::from_str(&contents).unwrap_or_else(|e| {
        panic!(
            "\n\n{label} BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            path.display()
        );
    });

    assert!(
        value.is_object(),
        "\n\n{label} BUILD ERROR: Root must be a JSON object\n\
         Got: {value}\n"
    );

    value
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    let workflows = catalog.get("workflows").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'workflows' field\n\
             The catalog must have a top-level 'workflows' array.\n"
        );
    });

    let entries = workflows.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'workflows' must be an array\n\
             Got: {workflows}\n"
        );
    });

    let mut total_keywords = 0;
    for (i, entry) in entries.iter().enumerate() {
        total_keywords += validate_workflow(entry, i);
    }

    println!(
        "cargo:warning=Validated catalog: {} workflows, {total_keywords} total keywords",
        entries.len()
    );
}

fn validate_workflow(entry: &serde_json::Value, index: usize) -> usize {
    let id = entry.get("id").and_then(|v| v.as_str()).unwrap_or_else(|| {
        panic!("\n\nCATALOG BUILD ERROR: Workflow at index {index} missing string 'id' field\n");
    });

    assert!(
        !id.trim().is_empty(),
        "\n\nCATALOG BUILD ERROR: Workflow at index {index} has a blank 'id'\n"
    );

    let keywords = entry
        .get("keywords")
        .and_then(|v| v.as_array())
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Workflow '{id}' (index {index}) missing 'keywords' array\n"
            );
        });

    for (j, keyword) in keywords.iter().enumerate() {
        assert!(
            keyword.is_string(),
            "\n\nCATALOG BUILD ERROR: Workflow '{id}' keyword {j} is not a string\n\
             Got: {keyword}\n"
        );
    }

    keywords.len()
}

fn validate_synonym_structure(synonyms: &serde_json::Value) {
    let table = synonyms
        .get("synonyms")
        .and_then(|v| v.as_object())
        .unwrap_or_else(|| {
            panic!(
                "\n\nSYNONYMS BUILD ERROR: Missing 'synonyms' object\n\
                 The synonym file must have a top-level 'synonyms' map.\n"
            );
        });

    for (term, related) in table {
        assert!(
            !term.is_empty(),
            "\n\nSYNONYMS BUILD ERROR: Empty term key in synonym table\n"
        );
        let related = related.as_array().unwrap_or_else(|| {
            panic!("\n\nSYNONYMS BUILD ERROR: Entry '{term}' must map to an array of strings\n");
        });
        assert!(
            related.iter().all(serde_json::Value::is_string),
            "\n\nSYNONYMS BUILD ERROR: Entry '{term}' contains a non-string related term\n"
        );
    }

    println!(
        "cargo:warning=Validated synonym table: {} terms",
        table.len()
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if the embedded tables change
    println!("cargo:rerun-if-changed=catalogs/workflows.json");
    println!("cargo:rerun-if-changed=catalogs/synonyms.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
