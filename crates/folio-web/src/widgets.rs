use crate::constants::*;
use crate::dom;
use crate::profile::{non_empty, opens_in_place, parse_contacts, split_list};
use folio_core::constants::CAROUSEL_INTERVAL_SEC;
use folio_core::interaction::spotlight;
use folio_core::terminal::{Action, PROMPT};
use folio_core::{Carousel, Profile, ProjectEntry, Terminal};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// ---------------- Terminal ----------------

fn read_projects(document: &web::Document) -> Vec<ProjectEntry> {
    let Some(carousel) = document.get_element_by_id(CAROUSEL_ID) else {
        return Vec::new();
    };
    dom::query_all(&carousel, CAROUSEL_SLIDE_SELECTOR)
        .iter()
        .filter_map(|slide| {
            Some(ProjectEntry {
                title: non_empty(slide.get_attribute(SLIDE_TITLE_ATTR))?,
                summary: non_empty(slide.get_attribute(SLIDE_SUMMARY_ATTR)).unwrap_or_default(),
                url: non_empty(slide.get_attribute(SLIDE_URL_ATTR)),
            })
        })
        .collect()
}

fn read_profile(document: &web::Document, terminal: &web::Element) -> Profile {
    let attr = |name: &str| non_empty(terminal.get_attribute(name));
    Profile {
        name: attr(PROFILE_NAME_ATTR).unwrap_or_else(|| "a developer".to_string()),
        role: attr(PROFILE_ROLE_ATTR).unwrap_or_default(),
        about: attr(PROFILE_ABOUT_ATTR).unwrap_or_default(),
        skills: attr(PROFILE_SKILLS_ATTR)
            .map(|s| split_list(&s))
            .unwrap_or_default(),
        projects: read_projects(document),
        contacts: attr(PROFILE_CONTACTS_ATTR)
            .map(|s| parse_contacts(&s))
            .unwrap_or_default(),
    }
}

fn append_line(document: &web::Document, output: &web::Element, text: &str) {
    if let Ok(line) = document.create_element("div") {
        line.set_class_name(TERMINAL_LINE_CLASS);
        line.set_text_content(Some(text));
        let _ = output.append_child(&line);
    }
}

/// Follow a link after a short pause so the reply is read first. `mailto:`
/// links replace the page location; everything else opens a new tab.
fn open_link_later(url: String) {
    let Some(window) = web::window() else {
        return;
    };
    let w = window.clone();
    let open = Closure::once_into_js(move || {
        let opened = if opens_in_place(&url) {
            w.location().set_href(&url).is_ok()
        } else {
            w.open_with_url_and_target(&url, "_blank").is_ok()
        };
        if !opened {
            log::warn!("[terminal] could not open {}", url);
        }
    });
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        open.unchecked_ref(),
        OPEN_LINK_DELAY_MS,
    );
}

pub fn wire_terminal(document: &web::Document, on_toggle_theme: fn()) {
    let (Some(root), Some(input_el), Some(output)) = (
        document.get_element_by_id(TERMINAL_ID),
        document.get_element_by_id(TERMINAL_INPUT_ID),
        document.get_element_by_id(TERMINAL_OUTPUT_ID),
    ) else {
        return;
    };
    let Ok(input) = input_el.dyn_into::<web::HtmlInputElement>() else {
        log::warn!("[terminal] #{} is not an input", TERMINAL_INPUT_ID);
        return;
    };

    let terminal = Rc::new(RefCell::new(Terminal::new(read_profile(document, &root))));
    for entry in terminal.borrow().greeting() {
        append_line(document, &output, &format!("{} {}", PROMPT, entry.command));
        append_line(document, &output, &entry.output);
    }

    let doc = document.clone();
    let input_for_key = input.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let mut term = terminal.borrow_mut();
        match ev.key().as_str() {
            "Enter" => {
                let line = input_for_key.value();
                input_for_key.set_value("");
                append_line(&doc, &output, &format!("{} {}", PROMPT, line));
                let response = term.execute(&line);
                for out in &response.lines {
                    append_line(&doc, &output, out);
                }
                match response.action {
                    Some(Action::Clear) => output.set_inner_html(""),
                    Some(Action::ToggleTheme) => on_toggle_theme(),
                    Some(Action::Open(url)) => open_link_later(url),
                    None => {}
                }
                output.set_scroll_top(output.scroll_height());
            }
            "ArrowUp" => {
                if let Some(prev) = term.history_prev() {
                    input_for_key.set_value(prev);
                }
                ev.prevent_default();
            }
            "ArrowDown" => {
                let next = term.history_next().unwrap_or("").to_string();
                input_for_key.set_value(&next);
                ev.prevent_default();
            }
            _ => {}
        }
    }) as Box<dyn FnMut(_)>);
    let _ = input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();

    // Clicking anywhere in the terminal focuses the prompt.
    let input_for_focus = input.clone();
    dom::on_click(&root, move || {
        let _ = input_for_focus.focus();
    });
    log::info!("[terminal] ready");
}

// ---------------- Carousel ----------------

fn show_slide(track: &web::Element, slides: &[web::Element], carousel: &Carousel) {
    if let Some(track) = track.dyn_ref::<web::HtmlElement>() {
        let _ = track.style().set_property(
            "transform",
            &format!("translateX({}%)", carousel.offset_percent()),
        );
    }
    for (i, slide) in slides.iter().enumerate() {
        let _ = slide
            .class_list()
            .toggle_with_force(CAROUSEL_ACTIVE_CLASS, i == carousel.index());
    }
}

pub fn wire_carousel(document: &web::Document) {
    let Some(root) = document.get_element_by_id(CAROUSEL_ID) else {
        return;
    };
    let Some(track) = root.query_selector(CAROUSEL_TRACK_SELECTOR).ok().flatten() else {
        log::warn!("[carousel] missing {}", CAROUSEL_TRACK_SELECTOR);
        return;
    };
    let slides = Rc::new(dom::query_all(&root, CAROUSEL_SLIDE_SELECTOR));
    let carousel = Rc::new(RefCell::new(Carousel::new(slides.len(), CAROUSEL_INTERVAL_SEC)));
    show_slide(&track, &slides, &carousel.borrow());

    let buttons: [(&str, fn(&mut Carousel) -> usize); 2] = [
        (CAROUSEL_PREV_SELECTOR, Carousel::prev),
        (CAROUSEL_NEXT_SELECTOR, Carousel::next),
    ];
    for (selector, step) in buttons {
        if let Some(button) = root.query_selector(selector).ok().flatten() {
            let (c, t, s) = (carousel.clone(), track.clone(), slides.clone());
            dom::on_click(&button, move || {
                step(&mut c.borrow_mut());
                show_slide(&t, &s, &c.borrow());
            });
        }
    }

    for (kind, paused) in [("mouseenter", true), ("mouseleave", false)] {
        let c = carousel.clone();
        let closure = Closure::wrap(Box::new(move || {
            c.borrow_mut().set_paused(paused);
        }) as Box<dyn FnMut()>);
        let _ = root.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let started = Instant::now();
    let autoplay = Closure::wrap(Box::new(move || {
        let now = started.elapsed().as_secs_f64();
        if carousel.borrow_mut().tick(now) {
            show_slide(&track, &slides, &carousel.borrow());
        }
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        let _ = w.set_interval_with_callback_and_timeout_and_arguments_0(
            autoplay.as_ref().unchecked_ref(),
            CAROUSEL_TICK_MS,
        );
    }
    autoplay.forget();
}

// ---------------- Spotlight ----------------

pub fn wire_spotlights(document: &web::Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    for card in dom::query_all(&root, SPOTLIGHT_SELECTOR) {
        let Ok(card) = card.dyn_into::<web::HtmlElement>() else {
            continue;
        };
        let target = card.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let pct = spotlight(
                Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
                Vec2::new(rect.left() as f32, rect.top() as f32),
                Vec2::new(rect.width() as f32, rect.height() as f32),
            );
            let style = target.style();
            let _ = style.set_property(SPOT_X_VAR, &format!("{:.1}%", pct.x));
            let _ = style.set_property(SPOT_Y_VAR, &format!("{:.1}%", pct.y));
        }) as Box<dyn FnMut(_)>);
        let _ = card.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
