//! A lightweight in-memory geometry kernel.
//!
//! Parts are stored as lists of elliptic cross sections; lofts are the sampled
//! section outlines in world coordinates. Good enough to drive and inspect a
//! morphing animation without a CAD kernel.

mod fuselage;
mod loft;
mod section;
mod wing;

pub use fuselage::*;
pub use loft::*;
pub use section::*;
pub use wing::*;

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::misc::FloatingPoint;

use super::{AircraftModel, SectionedPart};

#[cfg(test)]
mod tests;

/// Distance between consecutive default sections.
pub const DEFAULT_SECTION_SPACING: f64 = 1.;

/// Minimum number of sections a part needs to be lofted.
const MIN_SECTIONS: usize = 2;

/// Aircraft configuration of wireframe parts, persisted as a JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireframeAircraft<T: FloatingPoint> {
    uid: String,
    fuselages: Vec<WireframeFuselage<T>>,
    wings: Vec<WireframeWing<T>>,
}

impl<T: FloatingPoint> WireframeAircraft<T> {
    /// Create an empty configuration.
    pub fn new(uid: &str) -> Self {
        Self {
            uid: uid.to_string(),
            fuselages: vec![],
            wings: vec![],
        }
    }

    pub fn fuselages(&self) -> &[WireframeFuselage<T>] {
        &self.fuselages
    }

    pub fn wings(&self) -> &[WireframeWing<T>] {
        &self.wings
    }

    /// Read a configuration previously written with [`AircraftModel::write_configuration`].
    pub fn read_configuration(path: &Path) -> anyhow::Result<Self>
    where
        T: DeserializeOwned,
    {
        let file = File::open(path)
            .with_context(|| format!("Failed to open configuration '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse configuration '{}'", path.display()))
    }

    fn contains(&self, uid: &str) -> bool {
        self.fuselages.iter().any(|f| f.uid() == uid) || self.wings.iter().any(|w| w.uid() == uid)
    }
}

impl<T: FloatingPoint + Serialize> AircraftModel<T> for WireframeAircraft<T> {
    type Loft = WireframeLoft<T>;
    type Fuselage = WireframeFuselage<T>;
    type Wing = WireframeWing<T>;

    fn uid(&self) -> &str {
        &self.uid
    }

    fn fuselage(&self, uid: &str) -> Option<&Self::Fuselage> {
        self.fuselages.iter().find(|f| f.uid() == uid)
    }

    fn fuselage_mut(&mut self, uid: &str) -> Option<&mut Self::Fuselage> {
        self.fuselages.iter_mut().find(|f| f.uid() == uid)
    }

    fn wing(&self, uid: &str) -> Option<&Self::Wing> {
        self.wings.iter().find(|w| w.uid() == uid)
    }

    fn wing_mut(&mut self, uid: &str) -> Option<&mut Self::Wing> {
        self.wings.iter_mut().find(|w| w.uid() == uid)
    }

    fn create_fuselage(
        &mut self,
        uid: &str,
        section_count: usize,
    ) -> anyhow::Result<&mut Self::Fuselage> {
        anyhow::ensure!(!self.contains(uid), "Part `{}` already exists", uid);
        anyhow::ensure!(
            section_count >= MIN_SECTIONS,
            "Fuselage `{}` needs at least {} sections",
            uid,
            MIN_SECTIONS
        );
        self.fuselages.push(WireframeFuselage::new(uid, section_count));
        let index = self.fuselages.len() - 1;
        Ok(&mut self.fuselages[index])
    }

    fn create_wing(&mut self, uid: &str, section_count: usize) -> anyhow::Result<&mut Self::Wing> {
        anyhow::ensure!(!self.contains(uid), "Part `{}` already exists", uid);
        anyhow::ensure!(
            section_count >= MIN_SECTIONS,
            "Wing `{}` needs at least {} sections",
            uid,
            MIN_SECTIONS
        );
        self.wings.push(WireframeWing::new(uid, section_count));
        let index = self.wings.len() - 1;
        Ok(&mut self.wings[index])
    }

    /// Fails without touching `path` if a part holds non-finite values, which JSON cannot carry.
    fn write_configuration(&self, path: &Path) -> anyhow::Result<()> {
        for fuselage in self.fuselages.iter() {
            anyhow::ensure!(
                fuselage.is_finite(),
                "Fuselage `{}` has non-finite parameters",
                fuselage.uid()
            );
        }
        for wing in self.wings.iter() {
            anyhow::ensure!(wing.is_finite(), "Wing `{}` has non-finite parameters", wing.uid());
        }
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create '{}'", dir.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create configuration '{}'", path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}
