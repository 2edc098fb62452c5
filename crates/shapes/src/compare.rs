//! Side-by-side comparison of every shape at a common volume.

#[cfg(feature = "serde-derive")]
use serde::Serialize;

use crate::{
    BoxVariant, Config, CylinderOptimizer, CylinderVariant, Dimensions, Error, Geometry,
    RectangularBoxOptimizer, ShapeOptimizer, ShapeVariant, SolutionRecord, Volume,
};

/// Options for [`compare_shapes_with`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CompareOptions {
    /// Config handed to every optimizer.
    pub config: Config,

    /// Also run and check the numerical solution of each shape.
    pub verify: bool,
}

/// One shape's result in a [`ComparisonReport`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize))]
pub struct ComparisonEntry {
    pub variant: ShapeVariant,

    /// The analytical optimum.
    pub record: SolutionRecord<Dimensions>,

    /// Surface area over `V^(2/3)`, comparable across volumes.
    pub efficiency: f64,

    /// Height over radius for cylinders, length over height for boxes.
    pub dimensions_ratio: f64,

    /// The verified numerical optimum, when requested.
    pub verified: Option<SolutionRecord<Dimensions>>,
}

impl ComparisonEntry {
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.variant.label()
    }
}

/// Results for every shape at one volume, in evaluation order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize))]
pub struct ComparisonReport {
    volume: Volume,
    entries: Vec<ComparisonEntry>,
}

impl ComparisonReport {
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Looks up an entry by its shape label, such as `"box_open"`.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|e| e.label() == label)
    }

    #[must_use]
    pub fn get_variant(&self, variant: ShapeVariant) -> Option<&ComparisonEntry> {
        self.entries.iter().find(|e| e.variant == variant)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ComparisonEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries from least to most material per unit of volume.
    #[must_use]
    pub fn ranked(&self) -> Vec<&ComparisonEntry> {
        let mut ranked: Vec<_> = self.entries.iter().collect();
        ranked.sort_by(|a, b| a.efficiency.total_cmp(&b.efficiency));
        ranked
    }

    #[must_use]
    pub fn most_efficient(&self) -> Option<&ComparisonEntry> {
        self.entries
            .iter()
            .min_by(|a, b| a.efficiency.total_cmp(&b.efficiency))
    }
}

impl<'a> IntoIterator for &'a ComparisonReport {
    type Item = &'a ComparisonEntry;
    type IntoIter = std::slice::Iter<'a, ComparisonEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Compares the analytical optimum of every shape at `volume`.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `volume` is not positive and finite.
pub fn compare_shapes(volume: f64) -> Result<ComparisonReport, Error> {
    compare_shapes_with(volume, &CompareOptions::default())
}

/// Compares every shape at `volume` with explicit options.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for an invalid volume, and any error from
/// numerical verification when `options.verify` is set.
pub fn compare_shapes_with(
    volume: f64,
    options: &CompareOptions,
) -> Result<ComparisonReport, Error> {
    let volume = Volume::new(volume)?;
    log::debug!("comparing shapes at volume {volume}");

    let entries = ShapeVariant::ALL
        .into_iter()
        .map(|variant| {
            let config = options.config;
            match variant {
                ShapeVariant::CylinderClosed => entry(
                    &CylinderOptimizer::from_parts(volume, CylinderVariant::Closed, config),
                    options.verify,
                ),
                ShapeVariant::CylinderOpen => entry(
                    &CylinderOptimizer::from_parts(volume, CylinderVariant::Open, config),
                    options.verify,
                ),
                ShapeVariant::BoxOpenTop => entry(
                    &RectangularBoxOptimizer::from_parts(volume, BoxVariant::OpenTop, config),
                    options.verify,
                ),
                ShapeVariant::BoxClosed => entry(
                    &RectangularBoxOptimizer::from_parts(volume, BoxVariant::Closed, config),
                    options.verify,
                ),
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ComparisonReport { volume, entries })
}

fn entry<S: ShapeOptimizer>(shape: &S, verify: bool) -> Result<ComparisonEntry, Error> {
    let record = shape.analytical_solution()?.into_tagged();
    let verified = if verify {
        Some(shape.numerical_solution()?.into_tagged())
    } else {
        None
    };

    Ok(ComparisonEntry {
        variant: shape.variant(),
        efficiency: record.surface_area() / shape.volume().area_scale(),
        dimensions_ratio: record.dimensions().aspect_ratio(),
        record,
        verified,
    })
}
