//! Fixture device profiles for the reference host.
//!
//! All identifiers are representative of real builds but no real device is
//! contacted.

use std::collections::BTreeSet;

use trustgate_contracts::{
    device::SimState,
    signal::{BuildField, SettingKey},
};

use crate::profile::{BatteryFacts, BroadcastStatus, DeviceProfile, TelephonyFacts};

fn retail(name: &str, build: [(BuildField, &str); 7]) -> DeviceProfile {
    let profile = DeviceProfile {
        name: name.to_string(),
        charging_query: true,
        battery: BatteryFacts {
            level: Some(72),
            charging: Some(false),
            broadcast: Some(BroadcastStatus::Discharging),
        },
        existing_paths: Some(BTreeSet::new()),
        telephony: TelephonyFacts {
            sim_state: Some(SimState::Ready),
            operator_name: Some("Vodafone EG".to_string()),
        },
        ..Default::default()
    };
    build
        .into_iter()
        .fold(profile, |p, (field, value)| p.with_build(field, value))
        .with_setting(SettingKey::DevelopmentSettingsEnabled, 0)
        .with_setting(SettingKey::AdbEnabled, 0)
}

/// A retail Pixel 8 Pro on a Vodafone SIM.
pub fn pixel_8_pro() -> DeviceProfile {
    retail(
        "pixel-8-pro",
        [
            (BuildField::Fingerprint, "google/husky/husky:14/UD1A.230803.041/10808477:user/release-keys"),
            (BuildField::Model, "Pixel 8 Pro"),
            (BuildField::Manufacturer, "Google"),
            (BuildField::Brand, "google"),
            (BuildField::Device, "husky"),
            (BuildField::Hardware, "husky"),
            (BuildField::Product, "husky"),
        ],
    )
}

/// A retail Galaxy with developer options and wired debugging switched on.
pub fn developer_galaxy() -> DeviceProfile {
    retail(
        "galaxy-s23-dev",
        [
            (BuildField::Fingerprint, "samsung/dm1qxxx/dm1q:14/UP1A.231005.007/S911BXXU3BWK5:user/release-keys"),
            (BuildField::Model, "SM-S911B"),
            (BuildField::Manufacturer, "samsung"),
            (BuildField::Brand, "samsung"),
            (BuildField::Device, "dm1q"),
            (BuildField::Hardware, "qcom"),
            (BuildField::Product, "dm1qxxx"),
        ],
    )
    .with_setting(SettingKey::DevelopmentSettingsEnabled, 1)
    .with_setting(SettingKey::AdbEnabled, 1)
}

/// The stock Android Studio x86_64 emulator.
pub fn android_studio_emulator() -> DeviceProfile {
    let mut profile = retail(
        "android-studio-emulator",
        [
            (BuildField::Fingerprint, "google/sdk_gphone64_x86_64/emu64xa:14/UE1A.230829.036/10764120:userdebug/dev-keys"),
            (BuildField::Model, "sdk_gphone64_x86_64"),
            (BuildField::Manufacturer, "Google"),
            (BuildField::Brand, "google"),
            (BuildField::Device, "emu64xa"),
            (BuildField::Hardware, "ranchu"),
            (BuildField::Product, "sdk_gphone64_x86_64"),
        ],
    );
    profile.existing_paths = Some(["/dev/qemu_pipe".to_string()].into_iter().collect());
    profile.telephony.operator_name = Some("Android".to_string());
    profile
}

/// A Genymotion virtual device.
pub fn genymotion() -> DeviceProfile {
    retail(
        "genymotion",
        [
            (BuildField::Fingerprint, "Genymotion/vbox86p/vbox86p:11/RQ1A.210105.003/1:userdebug/test-keys"),
            (BuildField::Model, "Custom Phone"),
            (BuildField::Manufacturer, "Genymotion"),
            (BuildField::Brand, "Genymotion"),
            (BuildField::Device, "vbox86p"),
            (BuildField::Hardware, "vbox86"),
            (BuildField::Product, "vbox86p"),
        ],
    )
}

/// A clean build whose only tell is a simulated, always-full battery, on a
/// host without a direct charging query.
pub fn simulated_battery() -> DeviceProfile {
    let mut profile = pixel_8_pro();
    profile.name = "simulated-battery".to_string();
    profile.charging_query = false;
    profile.battery = BatteryFacts {
        level: Some(100),
        charging: None,
        broadcast: Some(BroadcastStatus::Full),
    };
    profile
}

/// A host adapter with every query stripped out.
pub fn stripped() -> DeviceProfile {
    DeviceProfile { name: "stripped".to_string(), ..Default::default() }
}

/// Every built-in profile, for listing in the CLI.
pub fn all() -> Vec<DeviceProfile> {
    vec![
        pixel_8_pro(),
        developer_galaxy(),
        android_studio_emulator(),
        genymotion(),
        simulated_battery(),
        stripped(),
    ]
}

/// Find a built-in profile by name.
pub fn by_name(name: &str) -> Option<DeviceProfile> {
    all().into_iter().find(|p| p.name == name)
}
