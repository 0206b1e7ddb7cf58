//! Catalog file loading end to end: write YAML to disk, load it back,
//! check the compiled records.

use fl_catalog::{CatalogStore, InMemoryCatalog, LineType};
use fl_props::Refrigerant;
use std::path::PathBuf;

fn unique_temp_path(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("fl_catalog_{}_{}", std::process::id(), name));
    dir
}

const CATALOG_YAML: &str = r#"
version: 1
compressors:
  - name: CMP-30
    displacement_50hz_m3h: 30.0
    displacement_60hz_m3h: 36.0
    max_low_side_bar: 19.0
    max_high_side_bar: 28.0
    suction_conn_mm: 22.0
    discharge_conn_mm: 16.0
    oil_conn_mm: 12.0
    refrigerants: [R134a, R290]
    envelope:
      - { t_evap_c: -20.0, t_cond_c: 30.0 }
      - { t_evap_c: 10.0, t_cond_c: 30.0 }
      - { t_evap_c: 10.0, t_cond_c: 60.0 }
      - { t_evap_c: -20.0, t_cond_c: 60.0 }
    constraints:
      - message: additional oil cooling required
        vertices:
          - { t_evap_c: -20.0, t_cond_c: 50.0 }
          - { t_evap_c: 10.0, t_cond_c: 50.0 }
          - { t_evap_c: 10.0, t_cond_c: 60.0 }
          - { t_evap_c: -20.0, t_cond_c: 60.0 }
pipes:
  - name: Cu 22x1
    inner_diameter_mm: 20.0
    outer_diameter_mm: 22.0
    material: copper
    line_type: suction
accessories:
  receivers:
    - name: RCV-9
      manufacturer: ESK
      max_pressure_bar: 33.0
      volume_l: 9.2
      conn_in_mm: 16.0
      conn_out_mm: 16.0
      refrigerants: [R134a]
      orientation: vertical
  check_valves:
    - name: CV-22
      model: NRV 22s
      manufacturer: Danfoss
      conn_mm: 22.0
      max_pressure_bar: 46.0
      kv: 4.6
      min_temperature_c: -60.0
      max_temperature_c: 140.0
"#;

#[test]
fn load_catalog_from_file() {
    let path = unique_temp_path("load.yaml");
    std::fs::write(&path, CATALOG_YAML).unwrap();

    let catalog = InMemoryCatalog::from_file(&path).unwrap();

    let compressors = catalog.compressors();
    assert_eq!(compressors.len(), 1);
    let compressor = &compressors[0];
    assert_eq!(compressor.name, "CMP-30");
    assert!(compressor.is_compatible(Refrigerant::R290));
    assert_eq!(compressor.envelope.vertices.len(), 4);
    assert_eq!(compressor.constraints.len(), 1);
    assert_eq!(
        compressor.constraints[0].message,
        "additional oil cooling required"
    );
    // 19 bar low side, in Pa
    assert!((compressor.max_low_side_pressure.value - 1_900_000.0).abs() < 1e-6);

    let suction = catalog.pipes(Some(LineType::Suction));
    assert_eq!(suction.len(), 1);
    assert!((suction[0].outer_diameter.value - 0.022).abs() < 1e-12);

    let accessories = catalog.accessories();
    assert_eq!(accessories.receivers.len(), 1);
    assert_eq!(accessories.check_valves.len(), 1);
    assert!((accessories.receivers[0].volume.value - 9.2e-3).abs() < 1e-12);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn bad_refrigerant_in_accessory_fails_load() {
    let path = unique_temp_path("bad.yaml");
    let broken = CATALOG_YAML.replace("refrigerants: [R134a]", "refrigerants: [R404A]");
    std::fs::write(&path, broken).unwrap();

    let err = InMemoryCatalog::from_file(&path).unwrap_err();
    assert!(err.to_string().contains("R404A"));

    let _ = std::fs::remove_file(&path);
}
