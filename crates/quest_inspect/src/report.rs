//! Text listings of maps, tilesets and entity types.

use std::fmt::{self, Write};

use quest_engine_edit::entity::{DrawInfo, EntityPresentation, ImageSource};
use quest_engine_edit::{EntityModel, EntityType, MapEditState, TilesetEditState};

pub fn describe_draw_info(draw_info: Option<&DrawInfo>) -> String {
    match draw_info {
        None => "nothing".to_string(),
        Some(DrawInfo::Shape(shape)) => {
            let mut text = format!("shape {}", shape.background_color.to_hex());
            if let Some(border) = shape.between_border_color {
                text.push_str(&format!(" border {}", border.to_hex()));
            }
            if let Some(pixmap) = &shape.pixmap {
                text.push_str(&format!(" {pixmap}"));
            }
            if shape.tiled {
                text.push_str(" tiled");
            }
            text
        }
        Some(DrawInfo::Sprite(sprite)) => match &sprite.animation {
            Some(animation) => format!("sprite {} ({animation}, direction {})", sprite.sprite_id, sprite.direction),
            None => format!("sprite {} (direction {})", sprite.sprite_id, sprite.direction),
        },
        Some(DrawInfo::ImageSet(images)) => match images.images.first().map(|image| &image.source) {
            Some(ImageSource::Pattern { tileset, pattern }) => match tileset {
                Some(tileset) => format!("pattern {pattern} of {tileset}"),
                None => format!("pattern {pattern}"),
            },
            Some(ImageSource::Resource(resource)) => format!("{} x{}", resource, images.images.len()),
            None => "no images".to_string(),
        },
    }
}

fn write_entity(out: &mut impl Write, model: &EntityModel, show_fields: bool) -> fmt::Result {
    let bounds = model.bounding_box();
    write!(out, "{:>6} {:<16} {}", model.index().to_string(), model.entity_type().name(), bounds)?;
    if let Some(name) = model.name() {
        write!(out, " '{name}'")?;
    }
    if let Some(direction) = model.direction() {
        write!(out, " dir {direction}")?;
    }
    if !model.is_traversable() {
        write!(out, " solid")?;
    }
    writeln!(out, " : {}", describe_draw_info(model.draw_info()))?;
    if show_fields {
        for (key, value) in model.data().fields() {
            writeln!(out, "         {key} = {value}")?;
        }
    }
    Ok(())
}

pub fn write_map(out: &mut impl Write, state: &MapEditState, layer: Option<i32>, show_fields: bool) -> fmt::Result {
    let properties = state.properties();
    writeln!(
        out,
        "map {} tileset '{}' layers {}..={} entities {}",
        properties.size,
        properties.tileset,
        properties.min_layer,
        properties.max_layer,
        state.entity_count()
    )?;
    let layers = match layer {
        Some(layer) => layer..=layer,
        None => properties.min_layer..=properties.max_layer,
    };
    for layer in layers {
        writeln!(out, "layer {layer} ({} entities)", state.entity_count_by_layer(layer))?;
        for model in state.entities_in_layer(layer) {
            write_entity(out, model, show_fields)?;
        }
    }
    Ok(())
}

pub fn write_tileset(out: &mut impl Write, state: &TilesetEditState) -> fmt::Result {
    writeln!(out, "tileset background {} patterns {}", state.background_color().to_hex(), state.pattern_count())?;
    for (index, id) in state.pattern_ids().enumerate() {
        let Some(pattern) = state.pattern(id) else {
            continue;
        };
        write!(out, "{index:>5} {id:<24} {:?} layer {} {}", pattern.ground, pattern.default_layer, pattern.first_frame())?;
        if pattern.is_animated() {
            write!(out, " {} frames every {}ms", pattern.frames.len(), pattern.frame_delay)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_entity_types(out: &mut impl Write) -> fmt::Result {
    for entity_type in EntityType::ALL {
        let presentation = EntityPresentation::of(entity_type);
        writeln!(
            out,
            "{:<16} origin {} size {} resize {:?} directions {} fields {}",
            entity_type.name(),
            presentation.origin,
            presentation.size,
            presentation.resize_mode,
            presentation.num_directions,
            entity_type.fields().len()
        )?;
    }
    Ok(())
}
