//! JSON input loader.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "warehouses": [{ "id": "W1", "location": [0, 0] }],
//!   "agents":     { "A1": [5, 5], "A2": { "x": 10, "y": 0 } },
//!   "packages":   [{ "id": "P1", "warehouse": "W1", "destination": [3, 4] }]
//! }
//! ```
//!
//! | Field        | Accepted shapes                                          |
//! |--------------|----------------------------------------------------------|
//! | `warehouses` | list of `{id, location}` records, or object keyed by id  |
//! | `agents`     | same as `warehouses`                                     |
//! | `packages`   | list of `{id, warehouse_id \| warehouse, destination}`   |
//! | locations    | `[x, y]` or `{ "x": .., "y": .. }`                       |
//!
//! Keyed objects keep their file order.  Missing collections are empty.

use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

use fb_core::{Agent, DeliveryInput, Package, Point, Warehouse};

use crate::InputResult;

// ── Raw records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawInput {
    #[serde(default)]
    warehouses: SiteTable,
    #[serde(default)]
    agents:     SiteTable,
    #[serde(default)]
    packages:   Vec<PackageRecord>,
}

#[derive(Deserialize, Clone, Copy)]
#[serde(untagged)]
enum RawPoint {
    Pair([f64; 2]),
    Xy { x: f64, y: f64 },
}

impl From<RawPoint> for Point {
    fn from(raw: RawPoint) -> Self {
        match raw {
            RawPoint::Pair(xy) => Point::from(xy),
            RawPoint::Xy { x, y } => Point::new(x, y),
        }
    }
}

#[derive(Deserialize)]
struct SiteRecord {
    id:       String,
    location: RawPoint,
}

#[derive(Deserialize)]
struct PackageRecord {
    id:           String,
    #[serde(alias = "warehouse")]
    warehouse_id: String,
    destination:  RawPoint,
}

/// Warehouses or agents in either list or keyed-object form.
#[derive(Deserialize)]
#[serde(untagged)]
enum SiteTable {
    List(Vec<SiteRecord>),
    Keyed(KeyedSites),
}

impl Default for SiteTable {
    fn default() -> Self {
        SiteTable::List(Vec::new())
    }
}

impl SiteTable {
    fn into_records(self) -> Vec<SiteRecord> {
        match self {
            SiteTable::List(v) | SiteTable::Keyed(KeyedSites(v)) => v,
        }
    }
}

/// `{ "<id>": <location>, … }`, collected in document order.
struct KeyedSites(Vec<SiteRecord>);

impl<'de> Deserialize<'de> for KeyedSites {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyedVisitor;

        impl<'de> Visitor<'de> for KeyedVisitor {
            type Value = KeyedSites;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping ids to locations")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<KeyedSites, A::Error> {
                let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((id, location)) = map.next_entry::<String, RawPoint>()? {
                    out.push(SiteRecord { id, location });
                }
                Ok(KeyedSites(out))
            }
        }

        deserializer.deserialize_map(KeyedVisitor)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and validate a [`DeliveryInput`] from a JSON file.
pub fn load_input(path: &Path) -> InputResult<DeliveryInput> {
    let file = std::fs::File::open(path)?;
    load_input_reader(std::io::BufReader::new(file))
}

/// Like [`load_input`] but accepts any `Read` source.
pub fn load_input_reader<R: Read>(reader: R) -> InputResult<DeliveryInput> {
    let raw: RawInput = serde_json::from_reader(reader)?;
    normalize(raw)
}

/// Like [`load_input`] but parses an in-memory string.
pub fn parse_input(json: &str) -> InputResult<DeliveryInput> {
    let raw: RawInput = serde_json::from_str(json)?;
    normalize(raw)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn normalize(raw: RawInput) -> InputResult<DeliveryInput> {
    let warehouses = raw
        .warehouses
        .into_records()
        .into_iter()
        .map(|r| Warehouse::new(r.id, Point::from(r.location)))
        .collect();

    let agents = raw
        .agents
        .into_records()
        .into_iter()
        .map(|r| Agent::new(r.id, Point::from(r.location)))
        .collect();

    let packages = raw
        .packages
        .into_iter()
        .map(|r| Package::new(r.id, r.warehouse_id, Point::from(r.destination)))
        .collect();

    let input = DeliveryInput::new(warehouses, agents, packages);
    input.validate()?;
    Ok(input)
}
