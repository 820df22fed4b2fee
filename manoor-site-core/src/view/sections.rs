//! Content sections, gallery, anchor and title

use crate::config::SiteConfig;
use crate::dom::{Display, DomOp};
use crate::locator::Locator;
use crate::model::{SectionView, Site, TitleState};

pub fn render(site: &Site, config: &SiteConfig, ops: &mut Vec<DomOp>) {
    let elements = &config.elements;
    let display = |target: &Locator, display| DomOp::SetDisplay {
        target: target.clone(),
        display,
    };

    match &site.view {
        SectionView::Markup => {}
        SectionView::Gallery => {
            ops.push(display(&elements.content_sections, Display::None));
            render_title(&site.title, config, ops);
            push_anchor(site, config, ops);
            ops.push(display(&elements.gallery, Display::Block));
        }
        SectionView::Section(id) => {
            ops.push(display(&elements.content_sections, Display::None));
            ops.push(display(&elements.gallery, Display::None));
            push_anchor(site, config, ops);
            ops.push(display(&Locator::id(id.as_str()), Display::Block));
            render_title(&site.title, config, ops);
        }
        SectionView::Unresolved(_) => {
            ops.push(display(&elements.content_sections, Display::None));
            ops.push(display(&elements.gallery, Display::None));
            push_anchor(site, config, ops);
        }
    }
}

fn push_anchor(site: &Site, config: &SiteConfig, ops: &mut Vec<DomOp>) {
    if site.anchor_shown {
        ops.push(DomOp::SetDisplay {
            target: config.elements.home_anchor.clone(),
            display: Display::Flex,
        });
    }
}

fn render_title(title: &TitleState, config: &SiteConfig, ops: &mut Vec<DomOp>) {
    let target = &config.elements.title;
    match title {
        TitleState::Markup => {}
        TitleState::Hidden(_) => ops.push(DomOp::SetDisplay {
            target: target.clone(),
            display: Display::None,
        }),
        TitleState::Shown(text) => {
            ops.push(DomOp::SetText {
                target: target.clone(),
                text: text.clone(),
            });
            ops.push(DomOp::SetDisplay {
                target: target.clone(),
                display: Display::Block,
            });
        }
    }
}
