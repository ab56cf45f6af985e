//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::io::Cursor;

use resnik_wsd::format::TaxonomyReader;
use resnik_wsd::graph::Taxonomy;

/// Small noun hierarchy with three senses of "bank".
///
/// ```text
/// entity (0.0)
/// ├── physical_entity (1.0)
/// │   └── object (2.0)
/// │       ├── slope (5.0) ── bank.n.01 (7.0)
/// │       └── river (6.5)
/// └── abstraction (0.8)
///     ├── finance (5.5)
///     │   ├── bank.n.02 (8.0)
///     │   └── money (7.5)
///     └── reserve (4.0) ── bank.n.03 (6.8)
/// gadget (3.0)              disconnected root
/// ```
pub const BANK_TAXONOMY_JSON: &str = r#"{
  "synsets": [
    { "name": "entity.n.01", "lemmas": ["entity"], "information_content": 0.0 },
    { "name": "physical_entity.n.01", "lemmas": ["physical entity"],
      "hypernyms": ["entity.n.01"], "information_content": 1.0 },
    { "name": "abstraction.n.06", "lemmas": ["abstraction"],
      "hypernyms": ["entity.n.01"], "information_content": 0.8 },
    { "name": "object.n.01", "lemmas": ["object"],
      "hypernyms": ["physical_entity.n.01"], "information_content": 2.0 },
    { "name": "slope.n.01", "lemmas": ["slope", "incline"],
      "hypernyms": ["object.n.01"], "information_content": 5.0 },
    { "name": "bank.n.01", "lemmas": ["bank"], "hypernyms": ["slope.n.01"],
      "definition": "sloping land beside a body of water", "information_content": 7.0 },
    { "name": "bank.n.02", "lemmas": ["bank", "depository financial institution"],
      "hypernyms": ["finance.n.01"],
      "definition": "a financial institution that accepts deposits", "information_content": 8.0 },
    { "name": "bank.n.03", "lemmas": ["bank"], "hypernyms": ["reserve.n.01"],
      "definition": "a supply or stock held in reserve", "information_content": 6.8 },
    { "name": "river.n.01", "lemmas": ["river"],
      "hypernyms": ["object.n.01"], "information_content": 6.5 },
    { "name": "finance.n.01", "lemmas": ["finance"],
      "hypernyms": ["abstraction.n.06"], "information_content": 5.5 },
    { "name": "money.n.01", "lemmas": ["money"],
      "hypernyms": ["finance.n.01"], "information_content": 7.5 },
    { "name": "reserve.n.01", "lemmas": ["reserve"],
      "hypernyms": ["abstraction.n.06"], "information_content": 4.0 },
    { "name": "gadget.n.01", "lemmas": ["gadget"], "information_content": 3.0 },
    { "name": "run.v.01", "lemmas": ["run"], "hypernyms": ["travel.v.01"] }
  ]
}"#;

/// Load the bank fixture.
pub fn bank_taxonomy() -> Taxonomy {
    TaxonomyReader::read_from(&mut Cursor::new(BANK_TAXONOMY_JSON)).unwrap()
}

/// Probe records exercising the bank fixture.
pub const PROBES_TSV: &str = "bank\triver,money\nbank\tslope,incline\n\nbank\tzyzzyva,quux\n";

/// Judgment records over words of the bank fixture.
pub const JUDGMENTS_CSV: &str = "bank,money,9\nriver,slope,2\ngadget,money,1\nmoney,finance,7\n";
