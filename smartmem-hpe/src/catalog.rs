//! Fixed constants of the HPE scheme: the secret string and the thermal
//! sensors known to ship on SmartMemory modules.

use smartmem_core::SensorCandidate;

/// Length of the secret appended to every canonical buffer.
pub const SECRET_LEN: usize = 35;

/// Copyright string embedded in the firmware and used as checksum key material.
pub const SECRET: &[u8; SECRET_LEN] = b"Copyright HP.  All rights reserved.";

/// Sensors tried, in this order, when the register pair is unknown.
pub const DEFAULT_SENSORS: &[SensorCandidate] = &[
    SensorCandidate::new_static("S34TS04A - Ablic", 0x1C85, 0x2221),
    SensorCandidate::new_static("STTS2004 - STMicroelectronics", 0x104A, 0x2201),
    SensorCandidate::new_static("MCP98244 - Microchip", 0x0054, 0x2201),
    SensorCandidate::new_static("TSE2004GB2B0 - Renesas", 0x00F8, 0xEE25),
];
