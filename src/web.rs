//! Browser adapter (WASM only)
//!
//! Binds the review board to the page: renders into the list container on
//! load and handles the review form's submit event.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement,
};

use crate::board::ReviewBoard;
use crate::config::ReviewLogConfig;
use crate::platform::{LocalStorage, SystemClock};
use crate::render::{Mount, ReviewCard};
use crate::submit::Submission;

type PageBoard = ReviewBoard<LocalStorage, SystemClock>;

/// The list container the cards are rendered into
pub struct DomMount {
    document: Document,
    list: Element,
}

impl DomMount {
    pub fn new(document: Document, list: Element) -> Self {
        Self { document, list }
    }

    fn element(&self, tag: &str, class: Option<&str>, text: &str) -> Result<Element, JsValue> {
        let el = self.document.create_element(tag)?;
        if let Some(class) = class {
            el.set_class_name(class);
        }
        if !text.is_empty() {
            el.set_text_content(Some(text));
        }
        Ok(el)
    }

    /// `<article class="review-card">` with meta, stars and message
    fn build_card(&self, card: &ReviewCard) -> Result<Element, JsValue> {
        let article = self.element("article", Some("review-card"), "")?;

        let meta = self.element("div", Some("review-meta"), "")?;
        meta.append_child(&self.element("strong", None, &card.name)?)?;
        meta.append_child(&self.element("small", Some("muted"), &card.date)?)?;

        let stars = self.element("div", Some("stars"), &card.stars.to_string())?;
        stars.set_attribute("aria-hidden", "true")?;

        let message = self.element("p", None, &card.message)?;

        article.append_child(&meta)?;
        article.append_child(&stars)?;
        article.append_child(&message)?;
        Ok(article)
    }
}

impl Mount for DomMount {
    fn replace_cards(&mut self, cards: &[ReviewCard]) {
        self.list.set_text_content(None);
        for card in cards {
            let appended = self
                .build_card(card)
                .and_then(|el| self.list.append_child(&el));
            if let Err(e) = appended {
                log::error!("Failed to render review {}: {:?}", card.id, e);
            }
        }
    }
}

/// Current value of an input, select or textarea by id ("" if absent)
fn field_value(document: &Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn read_submission(document: &Document, config: &ReviewLogConfig) -> Submission {
    Submission::new(
        field_value(document, &config.name_input_id),
        field_value(document, &config.rating_input_id),
        field_value(document, &config.message_input_id),
    )
}

/// Render the stored reviews and hook up the review form
pub fn run() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let board: Rc<PageBoard> = Rc::new(ReviewBoard::new(
        LocalStorage::new(),
        SystemClock,
        ReviewLogConfig::default(),
    ));

    let Some(list) = document.get_element_by_id(&board.config().list_id) else {
        log::warn!("No #{} on this page, reviews not shown", board.config().list_id);
        return Ok(());
    };
    let mount = Rc::new(RefCell::new(DomMount::new(document.clone(), list)));

    let shown = board.render(&mut *mount.borrow_mut());
    log::info!("Showing {} reviews", shown);

    let form = document
        .get_element_by_id(&board.config().form_id)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok());
    if let Some(form) = form {
        setup_form_handler(document, form, board, mount)?;
    }
    Ok(())
}

fn setup_form_handler(
    document: Document,
    form: HtmlFormElement,
    board: Rc<PageBoard>,
    mount: Rc<RefCell<DomMount>>,
) -> Result<(), JsValue> {
    let form_clone = form.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
        event.prevent_default();
        let submission = read_submission(&document, board.config());
        match board.submit(submission, &mut *mount.borrow_mut()) {
            Ok(_) => {
                form_clone.reset();
                // Ready for the next review
                if let Some(name) = document
                    .get_element_by_id(&board.config().name_input_id)
                    .and_then(|el| el.dyn_into::<HtmlElement>().ok())
                {
                    let _ = name.focus();
                }
            }
            Err(e) => log::debug!("Submission ignored: {}", e),
        }
    });
    form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
