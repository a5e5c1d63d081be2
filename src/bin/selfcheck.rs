//! Self-check tool: exercises the documented examples of every model and
//! reports pass/fail to the console. Exits non-zero if any check fails.

use anyhow::Result;

use fieldstation::units::length::{Kilometers, Meters, Millimeters};
use fieldstation::units::velocity::KilometersPerHour;
use fieldstation::{OpticalInstrument, Plant, Vehicle, PHOTOSYNTHESIS_REPORT};

struct Report {
    failures: usize,
}

impl Report {
    fn new() -> Self {
        Self { failures: 0 }
    }

    fn check(&mut self, name: &str, passed: bool) {
        if passed {
            println!("✓ {name}");
        } else {
            println!("✗ {name}");
            self.failures += 1;
        }
    }
}

fn main() -> Result<()> {
    println!("=== Field Station Self-Check ===");
    println!();

    let mut report = Report::new();

    // Vehicle
    let roadster = Vehicle::new(KilometersPerHour::new(120.0), 2)?;
    report.check(
        "vehicle stores max speed and capacity",
        roadster.max_speed().value() == 120.0 && roadster.capacity() == 2,
    );
    report.check(
        "vehicle covers 240 km in 2 h",
        roadster.travel_time(Kilometers::new(240.0))?.value() == 2.0,
    );
    report.check(
        "vehicle rejects a non-positive distance",
        roadster.travel_time(Kilometers::new(-5.0)).is_err(),
    );
    report.check(
        "vehicle rejects a non-positive speed",
        Vehicle::new(KilometersPerHour::new(0.0), 2).is_err(),
    );
    report.check(
        "vehicle rejects a zero capacity",
        Vehicle::new(KilometersPerHour::new(120.0), 0).is_err(),
    );

    // Plant
    let oak = Plant::new(Meters::new(10.5), 5)?;
    report.check(
        "plant stores height and age",
        oak.height().value() == 10.5 && oak.age() == 5,
    );
    report.check(
        "plant reports photosynthesis",
        oak.photosynthesize() == PHOTOSYNTHESIS_REPORT,
    );
    report.check(
        "plant rejects a non-positive height",
        Plant::new(Meters::new(0.0), 5).is_err(),
    );

    // Optical instrument
    let telescope = OpticalInstrument::new(Millimeters::new(120.0), Millimeters::new(600.0))?;
    report.check(
        "telescope magnifies 30x with a 20 mm eyepiece",
        telescope.magnification(Millimeters::new(20.0))? == 30.0,
    );
    report.check(
        "telescope gathers 293.8775510204x the naked-eye light",
        telescope.light_gathering_power() == 293.8775510204,
    );
    report.check(
        "telescope rejects a non-positive eyepiece",
        telescope.magnification(Millimeters::new(0.0)).is_err(),
    );
    report.check(
        "telescope rejects a non-positive aperture",
        OpticalInstrument::new(Millimeters::new(-120.0), Millimeters::new(600.0)).is_err(),
    );

    // Serialization
    let json = serde_json::to_string(&telescope)?;
    let restored: OpticalInstrument = serde_json::from_str(&json)?;
    report.check("telescope survives a JSON round-trip", restored == telescope);
    report.check(
        "JSON with an invalid aperture is rejected",
        serde_json::from_str::<OpticalInstrument>(r#"{"aperture":-1.0,"focal_length":600.0}"#)
            .is_err(),
    );

    println!();
    if report.failures == 0 {
        println!("✓ All checks passed");
        Ok(())
    } else {
        eprintln!("✗ {} check(s) failed", report.failures);
        anyhow::bail!("self-check failed")
    }
}
