//! Dimension resolver: finished size to saw-cut size
//!
//! `cut_height = final_height - (L1 + L2)` and `cut_width = final_width - (A1 + A2)`,
//! rounded to 0.1 mm and floored at 0. The raw discount is always reported,
//! even when the result was floored.

use cabinetkit_core::units::{mm_to_m, round_tenth};
use cabinetkit_core::{
    EdgeBand, EdgeSlot, MaterialId, MaterialLibrary, Piece, PieceAxis, ValidationWarning,
    WarningKind,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lookup of edge-band thickness by material id
pub trait EdgeThicknessSource {
    /// `None` when the id is unknown or not an edge material
    fn edge_thickness(&self, id: &MaterialId) -> Option<f64>;
}

impl EdgeThicknessSource for MaterialLibrary {
    fn edge_thickness(&self, id: &MaterialId) -> Option<f64> {
        MaterialLibrary::edge_thickness(self, id)
    }
}

impl EdgeThicknessSource for HashMap<MaterialId, f64> {
    fn edge_thickness(&self, id: &MaterialId) -> Option<f64> {
        self.get(id).copied()
    }
}

/// Total edge thickness subtracted from each axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeDiscounts {
    pub width: f64,
    pub height: f64,
}

/// Saw-cut size of a piece
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutDimensions {
    pub cut_width: f64,
    pub cut_height: f64,
    pub discounts: EdgeDiscounts,
    /// The width subtraction went negative and was floored to 0
    pub width_floored: bool,
    /// The height subtraction went negative and was floored to 0
    pub height_floored: bool,
}

impl CutDimensions {
    pub fn is_floored(&self) -> bool {
        self.width_floored || self.height_floored
    }

    /// Both cut sizes are strictly positive
    pub fn is_cuttable(&self) -> bool {
        self.cut_width > 0.0 && self.cut_height > 0.0
    }
}

/// Computes cut sizes against an edge thickness source
pub struct DimensionResolver<'a, S: EdgeThicknessSource + ?Sized> {
    edges: &'a S,
}

impl<'a, S: EdgeThicknessSource + ?Sized> DimensionResolver<'a, S> {
    pub fn new(edges: &'a S) -> Self {
        Self { edges }
    }

    /// Thickness consumed by a band; unknown materials count as 0
    pub fn band_thickness(&self, band: &EdgeBand) -> f64 {
        match band {
            EdgeBand::Material(id) => self.edges.edge_thickness(id).unwrap_or(0.0),
            EdgeBand::Fixed { thickness } => *thickness,
        }
    }

    pub fn discounts(&self, piece: &Piece) -> EdgeDiscounts {
        let mut discounts = EdgeDiscounts::default();
        for (slot, band) in piece.edges.occupied() {
            let thickness = self.band_thickness(band);
            match slot.consumes() {
                PieceAxis::Width => discounts.width += thickness,
                PieceAxis::Height => discounts.height += thickness,
            }
        }
        discounts
    }

    pub fn resolve(&self, piece: &Piece) -> CutDimensions {
        let discounts = self.discounts(piece);
        let raw_width = round_tenth(piece.final_width - discounts.width);
        let raw_height = round_tenth(piece.final_height - discounts.height);

        CutDimensions {
            cut_width: raw_width.max(0.0),
            cut_height: raw_height.max(0.0),
            discounts,
            width_floored: raw_width < 0.0,
            height_floored: raw_height < 0.0,
        }
    }

    /// Warnings for unknown edge materials and cut sizes of 0 or less
    pub fn warnings(&self, piece: &Piece) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        for (slot, band) in piece.edges.occupied() {
            if let EdgeBand::Material(id) = band {
                if self.edges.edge_thickness(id).is_none() {
                    warnings.push(ValidationWarning::new(
                        WarningKind::UnknownEdgeMaterial,
                        &piece.id.0,
                        format!("edge {:?} references unknown edge material '{}'", slot, id),
                    ));
                }
            }
        }

        let cut = self.resolve(piece);
        if !cut.is_cuttable() {
            warnings.push(ValidationWarning::new(
                WarningKind::CutDimensionFloored,
                &piece.id.0,
                format!(
                    "edge banding leaves no material to cut: {:.1} x {:.1} finished, discounts {:.1} x {:.1}",
                    piece.final_width, piece.final_height, cut.discounts.width, cut.discounts.height
                ),
            ));
        }

        warnings
    }
}

/// Linear banding consumed by one occupied material edge slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRun {
    pub slot: EdgeSlot,
    pub material: MaterialId,
    /// Band length for one copy, in mm
    pub length_mm: f64,
    /// Band length for all copies, in m
    pub total_m: f64,
}

/// Banding runs of a piece. L edges consume `final_width`, A edges `final_height`.
/// Fixed allowances are not banding and produce no run.
pub fn edge_runs(piece: &Piece) -> Vec<EdgeRun> {
    piece
        .edges
        .occupied()
        .filter_map(|(slot, band)| {
            band.material().map(|material| {
                let length_mm = piece.final_size(slot.runs_along());
                EdgeRun {
                    slot,
                    material: material.clone(),
                    length_mm,
                    total_m: mm_to_m(length_mm * f64::from(piece.quantity)),
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinetkit_core::{EdgeSlots, PieceRole};

    fn thicknesses() -> HashMap<MaterialId, f64> {
        let mut map = HashMap::new();
        map.insert(MaterialId::from("PVC2"), 2.0);
        map.insert(MaterialId::from("PVC04"), 0.4);
        map
    }

    #[test]
    fn test_no_edges_keeps_final_size() {
        let map = thicknesses();
        let resolver = DimensionResolver::new(&map);
        let piece = Piece::new("p", "Panel", PieceRole::Shelf, 562.0, 540.0);
        let cut = resolver.resolve(&piece);
        assert_eq!(cut.cut_width, 562.0);
        assert_eq!(cut.cut_height, 540.0);
        assert_eq!(cut.discounts, EdgeDiscounts::default());
    }

    #[test]
    fn test_cross_axis_subtraction() {
        let map = thicknesses();
        let resolver = DimensionResolver::new(&map);
        let piece = Piece::new("door", "Door", PieceRole::Shelf, 397.0, 717.0)
            .with_edge(EdgeSlot::L1, Some(EdgeBand::Material("PVC2".into())))
            .with_edge(EdgeSlot::L2, Some(EdgeBand::Material("PVC04".into())))
            .with_edge(EdgeSlot::A1, Some(EdgeBand::Material("PVC2".into())));
        let cut = resolver.resolve(&piece);
        assert_eq!(cut.cut_height, 714.6);
        assert_eq!(cut.cut_width, 395.0);
        assert!((cut.discounts.height - 2.4).abs() < 1e-9);
        assert_eq!(cut.discounts.width, 2.0);
    }

    #[test]
    fn test_floored_result_keeps_raw_discount() {
        let map = thicknesses();
        let resolver = DimensionResolver::new(&map);
        let piece = Piece::new("strip", "Strip", PieceRole::Shelf, 30.0, 10.0)
            .with_edges(EdgeSlots::all(EdgeBand::fixed(18.0)));
        let cut = resolver.resolve(&piece);
        assert_eq!(cut.cut_width, 0.0);
        assert_eq!(cut.cut_height, 0.0);
        assert!(cut.width_floored && cut.height_floored);
        assert_eq!(cut.discounts.width, 36.0);
        assert!(!cut.is_cuttable());

        let warnings = resolver.warnings(&piece);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::CutDimensionFloored);
    }

    #[test]
    fn test_exact_zero_cut_is_reported() {
        let map = thicknesses();
        let resolver = DimensionResolver::new(&map);
        let piece = Piece::new("filler", "Filler", PieceRole::Shelf, 36.0, 300.0)
            .with_edge(EdgeSlot::A1, Some(EdgeBand::fixed(18.0)))
            .with_edge(EdgeSlot::A2, Some(EdgeBand::fixed(18.0)));
        let cut = resolver.resolve(&piece);
        assert_eq!(cut.cut_width, 0.0);
        assert!(!cut.width_floored);
        assert!(!cut.is_cuttable());

        let warnings = resolver.warnings(&piece);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::CutDimensionFloored);
        assert_eq!(warnings[0].subject, "filler");
    }

    #[test]
    fn test_unknown_edge_material_counts_as_zero() {
        let map = thicknesses();
        let resolver = DimensionResolver::new(&map);
        let piece = Piece::new("p", "Panel", PieceRole::Shelf, 500.0, 300.0)
            .with_edge(EdgeSlot::L1, Some(EdgeBand::Material("ghost".into())));
        assert_eq!(resolver.resolve(&piece).cut_height, 300.0);
        let warnings = resolver.warnings(&piece);
        assert_eq!(warnings[0].kind, WarningKind::UnknownEdgeMaterial);
    }

    #[test]
    fn test_edge_runs_use_opposite_axis() {
        let piece = Piece::new("floor", "Floor", PieceRole::Floor, 564.0, 560.0)
            .with_quantity(2)
            .with_edge(EdgeSlot::L1, Some(EdgeBand::Material("PVC2".into())))
            .with_edge(EdgeSlot::A2, Some(EdgeBand::Material("PVC04".into())))
            .with_edge(EdgeSlot::A1, Some(EdgeBand::fixed(18.0)));
        let runs = edge_runs(&piece);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].slot, EdgeSlot::L1);
        assert_eq!(runs[0].length_mm, 564.0);
        assert!((runs[0].total_m - 1.128).abs() < 1e-9);
        assert_eq!(runs[1].slot, EdgeSlot::A2);
        assert_eq!(runs[1].length_mm, 560.0);
    }
}
