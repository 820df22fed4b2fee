//! Image modal and body scroll lock

use crate::config::SiteConfig;
use crate::dom::{Display, DomOp, Overflow};
use crate::model::{LightboxState, Site};

pub fn render(site: &Site, config: &SiteConfig, ops: &mut Vec<DomOp>) {
    let elements = &config.elements;
    match &site.lightbox {
        LightboxState::Open { src, caption } => {
            ops.push(DomOp::SetDisplay {
                target: elements.modal.clone(),
                display: Display::Flex,
            });
            ops.push(DomOp::SetAttribute {
                target: elements.modal_image.clone(),
                name: "src".to_string(),
                value: src.clone(),
            });
            if site.caption_present {
                ops.push(DomOp::SetText {
                    target: elements.modal_caption.clone(),
                    text: caption.clone(),
                });
            }
        }
        LightboxState::Closed => {
            ops.push(DomOp::SetDisplay {
                target: elements.modal.clone(),
                display: Display::None,
            });
        }
    }

    ops.push(DomOp::SetBodyOverflow(if site.lightbox.locks_scroll() {
        Overflow::Hidden
    } else {
        Overflow::Auto
    }));
}
