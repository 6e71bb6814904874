//! DXF serializer
//!
//! Renders one piece as an ASCII DXF document: HEADER, a LAYER table, the
//! outline as a closed LWPOLYLINE on `OUTLINE`, then one CIRCLE per
//! operation grouped by layer in first-seen order, with a cross mark at
//! every hinge cup centre. Output is byte-identical for identical input.

use crate::error::{DxfError, DxfResult};
use crate::operations::{check_bounds, Feature, MachiningOperation};
use cabinetkit_core::PieceId;
use tracing::debug;

pub const OUTLINE_LAYER: &str = "OUTLINE";
const OUTLINE_COLOR: u8 = 7;
/// ACI colours handed out first to tool layers, in first-seen order
const LAYER_PALETTE: [u8; 8] = [1, 5, 3, 6, 4, 2, 30, 140];
/// Highest ACI colour index
const MAX_ACI: u8 = 255;
/// Half-length of the hinge cup cross mark
const CROSS_ARM: f64 = 5.0;

/// Serializer for piece DXF documents
pub struct DxfSerializer;

impl DxfSerializer {
    /// Serialize a piece outline with its front-face operations
    pub fn serialize(
        piece_id: &PieceId,
        piece_name: &str,
        width: f64,
        height: f64,
        operations: &[MachiningOperation],
    ) -> DxfResult<String> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(DxfError::InvalidOutline {
                piece_id: piece_id.0.clone(),
                width,
                height,
            });
        }
        for op in operations {
            if op.is_edge() {
                return Err(DxfError::EdgeOperation {
                    piece_id: piece_id.0.clone(),
                    operation: op.description.clone(),
                });
            }
            check_bounds(piece_id, op, width, height)?;
        }

        let layers = layer_order(operations);
        let colors: Vec<u8> = layer_colors().take(layers.len()).collect();
        if colors.len() < layers.len() {
            return Err(DxfError::TooManyLayers {
                piece_id: piece_id.0.clone(),
                layers: layers.len(),
                max: layer_colors().count(),
            });
        }
        let mut doc = DxfWriter::default();

        doc.pair(999, &format!("{} {}", piece_id, piece_name));
        write_header(&mut doc);
        write_layer_table(&mut doc, &layers, &colors);

        doc.pair(0, "SECTION");
        doc.pair(2, "ENTITIES");
        write_outline(&mut doc, width, height);
        for layer in &layers {
            for op in operations.iter().filter(|op| &op.layer == layer) {
                write_circle(&mut doc, op);
                if op.feature == Feature::HingeCup {
                    write_cross(&mut doc, op);
                }
            }
        }
        doc.pair(0, "ENDSEC");
        doc.pair(0, "EOF");

        debug!(
            piece = %piece_id,
            layers = layers.len(),
            operations = operations.len(),
            "Serialized DXF"
        );
        Ok(doc.finish())
    }
}

/// Distinct tool layers in order of first use
fn layer_order(operations: &[MachiningOperation]) -> Vec<String> {
    let mut layers: Vec<String> = Vec::new();
    for op in operations {
        if !layers.contains(&op.layer) {
            layers.push(op.layer.clone());
        }
    }
    layers
}

/// Palette colours, then every other ACI index except the outline's.
/// Each index appears once.
fn layer_colors() -> impl Iterator<Item = u8> {
    LAYER_PALETTE.into_iter().chain(
        (1..=MAX_ACI).filter(|c| *c != OUTLINE_COLOR && !LAYER_PALETTE.contains(c)),
    )
}

/// Group-code pair writer
#[derive(Default)]
struct DxfWriter {
    out: String,
}

impl DxfWriter {
    fn pair(&mut self, code: u16, value: &str) {
        self.out.push_str(&format!("{:>3}\n{}\n", code, value));
    }

    fn int(&mut self, code: u16, value: i64) {
        self.pair(code, &value.to_string());
    }

    fn real(&mut self, code: u16, value: f64) {
        self.pair(code, &format!("{:.3}", value));
    }

    fn finish(self) -> String {
        self.out
    }
}

fn write_header(doc: &mut DxfWriter) {
    doc.pair(0, "SECTION");
    doc.pair(2, "HEADER");
    doc.pair(9, "$ACADVER");
    doc.pair(1, "AC1015");
    doc.pair(9, "$INSUNITS");
    doc.int(70, 4);
    doc.pair(0, "ENDSEC");
}

fn write_layer_table(doc: &mut DxfWriter, layers: &[String], colors: &[u8]) {
    doc.pair(0, "SECTION");
    doc.pair(2, "TABLES");
    doc.pair(0, "TABLE");
    doc.pair(2, "LAYER");
    doc.int(70, (layers.len() + 1) as i64);

    write_layer(doc, OUTLINE_LAYER, OUTLINE_COLOR);
    for (layer, color) in layers.iter().zip(colors) {
        write_layer(doc, layer, *color);
    }

    doc.pair(0, "ENDTAB");
    doc.pair(0, "ENDSEC");
}

fn write_layer(doc: &mut DxfWriter, name: &str, color: u8) {
    doc.pair(0, "LAYER");
    doc.pair(2, name);
    doc.int(70, 0);
    doc.int(62, i64::from(color));
    doc.pair(6, "CONTINUOUS");
}

fn write_outline(doc: &mut DxfWriter, width: f64, height: f64) {
    doc.pair(0, "LWPOLYLINE");
    doc.pair(8, OUTLINE_LAYER);
    doc.int(90, 4);
    doc.int(70, 1);
    for (x, y) in [(0.0, 0.0), (width, 0.0), (width, height), (0.0, height)] {
        doc.real(10, x);
        doc.real(20, y);
    }
}

fn write_circle(doc: &mut DxfWriter, op: &MachiningOperation) {
    doc.pair(0, "CIRCLE");
    doc.pair(8, &op.layer);
    doc.real(10, op.x);
    doc.real(20, op.y);
    doc.real(30, 0.0);
    doc.real(40, op.radius());
}

fn write_cross(doc: &mut DxfWriter, op: &MachiningOperation) {
    for (dx, dy) in [(CROSS_ARM, 0.0), (0.0, CROSS_ARM)] {
        doc.pair(0, "LINE");
        doc.pair(8, &op.layer);
        doc.real(10, op.x - dx);
        doc.real(20, op.y - dy);
        doc.real(30, 0.0);
        doc.real(11, op.x + dx);
        doc.real(21, op.y + dy);
        doc.real(31, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::Face;
    use cabinetkit_core::EdgeSlot;

    fn ops() -> Vec<MachiningOperation> {
        vec![
            MachiningOperation::drill(Feature::HingeCup, Face::Front, 22.5, 100.0, 35.0, 13.0, "hinge 1 cup"),
            MachiningOperation::drill(Feature::HingePilot, Face::Front, 22.5, 82.5, 2.0, 10.0, "hinge 1 lower pilot"),
            MachiningOperation::drill(Feature::HingeCup, Face::Front, 22.5, 600.0, 35.0, 13.0, "hinge 2 cup"),
        ]
    }

    #[test]
    fn test_layer_colors_are_unique() {
        let colors: Vec<u8> = layer_colors().collect();
        assert_eq!(&colors[..8], &LAYER_PALETTE);
        assert!(!colors.contains(&OUTLINE_COLOR));
        let mut unique = colors.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), colors.len());
        assert_eq!(colors.len(), 254);
    }

    #[test]
    fn test_section_order() {
        let dxf = DxfSerializer::serialize(&"door".into(), "Door", 397.0, 700.0, &ops()).unwrap();
        let header = dxf.find("HEADER").unwrap();
        let tables = dxf.find("TABLES").unwrap();
        let entities = dxf.find("ENTITIES").unwrap();
        assert!(header < tables && tables < entities);
        assert!(dxf.ends_with("  0\nEOF\n"));
        assert!(dxf.contains("397.000"));
    }

    #[test]
    fn test_cups_grouped_before_pilots() {
        let dxf = DxfSerializer::serialize(&"door".into(), "Door", 397.0, 700.0, &ops()).unwrap();
        let second_cup = dxf.find("600.000").unwrap();
        let pilot = dxf.find("82.500").unwrap();
        assert!(second_cup < pilot);
        assert_eq!(dxf.matches("\nLINE\n").count(), 4);
    }

    #[test]
    fn test_edge_operations_rejected() {
        let bolt = MachiningOperation::drill(
            Feature::MinifixBolt,
            Face::Edge(EdgeSlot::A1),
            37.0,
            9.0,
            8.0,
            34.0,
            "minifix bolt left 1",
        );
        assert!(matches!(
            DxfSerializer::serialize(&"floor".into(), "Floor", 564.0, 560.0, &[bolt]),
            Err(DxfError::EdgeOperation { .. })
        ));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let stray = MachiningOperation::drill(Feature::HingeCup, Face::Front, 22.5, 690.0, 35.0, 13.0, "stray");
        assert!(matches!(
            DxfSerializer::serialize(&"door".into(), "Door", 397.0, 700.0, &[stray]),
            Err(DxfError::Machining(_))
        ));
    }
}
