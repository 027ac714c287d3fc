use dxf::entities::EntityType;
use sectionscan_core::geom::Vec2;
use sectionscan_core::model::{Arc2D, Circle2D, Polyline2D, SectionEntity};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("load DXF {}: {source}", path.display())]
    Load {
        path: PathBuf,
        source: dxf::DxfError,
    },
}

/// Read the contour-bearing entities of a drawing's model space. Entity
/// kinds that cannot bound an area are dropped here, silently.
pub fn import_dxf(path: &Path) -> Result<Vec<SectionEntity>, ImportError> {
    let drawing = dxf::Drawing::load_file(path).map_err(|source| ImportError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let mut entities = Vec::new();
    for ent in drawing.entities() {
        if let Some(converted) = map_entity(ent) {
            entities.push(converted);
        }
    }
    Ok(entities)
}

fn map_entity(ent: &dxf::entities::Entity) -> Option<SectionEntity> {
    match &ent.specific {
        EntityType::LwPolyline(poly) => Some(SectionEntity::Polyline(Polyline2D {
            // Bulge data is dropped; chamber rings are flat vertex loops.
            vertices: poly.vertices.iter().map(|v| Vec2::new(v.x, v.y)).collect(),
            closed: poly.is_closed(),
        })),
        EntityType::Polyline(poly) => Some(SectionEntity::Polyline(Polyline2D {
            vertices: poly
                .vertices()
                .map(|v| Vec2::new(v.location.x, v.location.y))
                .collect(),
            closed: poly.is_closed(),
        })),
        EntityType::Circle(circle) => Some(SectionEntity::Circle(Circle2D {
            center: Vec2::new(circle.center.x, circle.center.y),
            radius: circle.radius,
        })),
        EntityType::Arc(arc) => Some(SectionEntity::Arc(Arc2D {
            center: Vec2::new(arc.center.x, arc.center.y),
            radius: arc.radius,
            start_angle_deg: arc.start_angle,
            end_angle_deg: arc.end_angle,
        })),
        _ => None,
    }
}
