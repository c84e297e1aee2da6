use super::*;
use smartmem_core::RegisterPair;

#[test]
fn builtin_catalog_order() {
    let catalog = SensorCatalog::builtin();
    let labels: Vec<&str> = catalog.candidates().iter().map(|c| c.label.as_ref()).collect();
    assert_eq!(
        labels,
        vec![
            "S34TS04A - Ablic",
            "STTS2004 - STMicroelectronics",
            "MCP98244 - Microchip",
            "TSE2004GB2B0 - Renesas",
        ]
    );
    assert!(catalog.entries().all(|(_, o)| o == SensorOrigin::BuiltIn));
}

#[test]
fn builtin_registers() {
    let catalog = SensorCatalog::builtin();
    let regs: Vec<RegisterPair> = catalog.candidates().iter().map(|c| c.registers).collect();
    assert_eq!(
        regs,
        vec![
            RegisterPair::new(0x1C85, 0x2221),
            RegisterPair::new(0x104A, 0x2201),
            RegisterPair::new(0x0054, 0x2201),
            RegisterPair::new(0x00F8, 0xEE25),
        ]
    );
}

#[test]
fn settings_sensors_follow_builtins() {
    let settings = Settings::parse(
        "[[sensors]]\nlabel = \"Custom\"\nreg6 = \"1234\"\nreg7 = \"5678\"\n",
    )
    .unwrap();
    let catalog = SensorCatalog::from_settings(&settings).unwrap();

    assert_eq!(catalog.len(), 5);
    let (last, origin) = catalog.entries().last().unwrap();
    assert_eq!(last.label, "Custom");
    assert_eq!(origin, SensorOrigin::Settings);
}

#[test]
fn duplicate_labels_are_skipped() {
    let mut catalog = SensorCatalog::builtin();
    catalog.extend([
        SensorCandidate::new("s34ts04a - ablic", RegisterPair::new(1, 1)),
        SensorCandidate::new("New", RegisterPair::new(2, 2)),
        SensorCandidate::new("new", RegisterPair::new(3, 3)),
    ]);
    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.candidates()[0].registers, RegisterPair::new(0x1C85, 0x2221));
    assert_eq!(catalog.candidates()[4].registers, RegisterPair::new(2, 2));
}

#[test]
fn find_exact_and_substring() {
    let catalog = SensorCatalog::builtin();
    assert_eq!(
        catalog.find("MCP98244 - Microchip").unwrap().registers,
        RegisterPair::new(0x0054, 0x2201)
    );
    assert_eq!(
        catalog.find("stts2004").unwrap().registers,
        RegisterPair::new(0x104A, 0x2201)
    );
    assert_eq!(
        catalog.find("Renesas").unwrap().registers,
        RegisterPair::new(0x00F8, 0xEE25)
    );
}

#[test]
fn find_unknown_and_ambiguous() {
    let catalog = SensorCatalog::builtin();
    assert!(matches!(
        catalog.find("LM75"),
        Err(SchemeError::UnknownSensor(_))
    ));
    assert!(matches!(catalog.find(""), Err(SchemeError::UnknownSensor(_))));
    match catalog.find("micro") {
        Err(SchemeError::AmbiguousSensor { candidates, .. }) => {
            assert_eq!(candidates.len(), 2);
        }
        other => panic!("expected ambiguity, got {:?}", other),
    }
}
