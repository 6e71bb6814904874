//! Cut-list CSV interchange for external sheet optimizers
//!
//! One row per physical copy, carrying cut (not finished) sizes. Pieces
//! with a non-positive cut size are skipped with a warning.

use crate::dimensions::DimensionResolver;
use crate::error::{DesignError, DesignResult};
use cabinetkit_core::{MaterialId, MaterialLibrary, Piece};
use csv::Writer;
use std::io;
use tracing::{debug, warn};

pub const CUTLIST_HEADER: [&str; 7] = ["Length", "Width", "Qty", "Label", "Material", "Enabled", "Grain"];

/// Write the cut list, returning the number of rows written
pub fn write_cutlist_csv<W: io::Write>(
    pieces: &[Piece],
    materials: &MaterialLibrary,
    default_board: &MaterialId,
    writer: W,
) -> DesignResult<usize> {
    let resolver = DimensionResolver::new(materials);
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(CUTLIST_HEADER)?;

    let mut rows = 0;
    for piece in pieces {
        let cut = resolver.resolve(piece);
        if !cut.is_cuttable() {
            warn!(
                piece = %piece.id,
                cut_width = cut.cut_width,
                cut_height = cut.cut_height,
                "Skipping piece with non-positive cut size"
            );
            continue;
        }

        let board = piece.material.as_ref().unwrap_or(default_board);
        let material = materials
            .get_material(board)
            .map(|m| m.name.as_str())
            .unwrap_or(board.0.as_str());
        let length = format!("{:.1}", cut.cut_height);
        let width = format!("{:.1}", cut.cut_width);
        let grain = if piece.grain_locked { "true" } else { "false" };

        for _ in 0..piece.quantity {
            wtr.write_record([
                length.as_str(),
                width.as_str(),
                "1",
                piece.name.as_str(),
                material,
                "true",
                grain,
            ])?;
            rows += 1;
        }
    }

    wtr.flush()?;
    debug!(rows, pieces = pieces.len(), "Wrote cut list");
    Ok(rows)
}

/// Render the cut list into a string
pub fn cutlist_csv_string(
    pieces: &[Piece],
    materials: &MaterialLibrary,
    default_board: &MaterialId,
) -> DesignResult<String> {
    let mut buffer = Vec::new();
    write_cutlist_csv(pieces, materials, default_board, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| DesignError::invalid_value("cutlist", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinetkit_core::{EdgeBand, EdgeSlot, Material, MaterialKind, PieceRole};

    fn materials() -> MaterialLibrary {
        vec![
            Material::new("MEL18", "Melamine 18", MaterialKind::Board, 18.0, 32.0),
            Material::new("PVC2", "PVC 2", MaterialKind::Edge, 2.0, 0.9),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_rows_expand_quantity_and_use_cut_sizes() {
        let band = Some(EdgeBand::Material("PVC2".into()));
        let pieces = vec![Piece::new("lateral", "Lateral", PieceRole::Lateral, 560.0, 720.0)
            .with_quantity(2)
            .with_edge(EdgeSlot::A1, band)
            .with_grain_locked(true)];

        let csv = cutlist_csv_string(&pieces, &materials(), &"MEL18".into()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Length,Width,Qty,Label,Material,Enabled,Grain");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "720.0,558.0,1,Lateral,Melamine 18,true,true");
        assert_eq!(lines[1], lines[2]);
    }

    #[test]
    fn test_non_positive_cut_is_skipped() {
        let pieces = vec![
            Piece::new("strip", "Strip", PieceRole::Shelf, 10.0, 300.0)
                .with_edge(EdgeSlot::A1, Some(EdgeBand::fixed(6.0)))
                .with_edge(EdgeSlot::A2, Some(EdgeBand::fixed(6.0))),
            Piece::new("shelf", "Shelf", PieceRole::Shelf, 500.0, 300.0)
                .with_material(Some("OAK".into())),
        ];
        let mut out = Vec::new();
        let rows = write_cutlist_csv(&pieces, &materials(), &"MEL18".into(), &mut out).unwrap();
        assert_eq!(rows, 1);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("300.0,500.0,1,Shelf,OAK,true,false"));
        assert!(!text.contains("Strip"));
    }
}
