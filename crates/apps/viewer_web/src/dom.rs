//! Panel surface backed by the page's DOM.

use panels::{DetailField, Drawer, ListEntry, PanelSurface};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

const DETAIL_ID: &str = "event-detail";
const LIST_ID: &str = "event-list";

pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn query(&self, selector: &str) -> Result<Element, JsValue> {
        self.document
            .query_selector(selector)?
            .ok_or_else(|| JsValue::from_str(&format!("missing element {selector}")))
    }

    fn by_id(&self, id: &str) -> Result<Element, JsValue> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))
    }

    fn list_item(&self, entry: &ListEntry) -> Result<Element, JsValue> {
        let li = self.document.create_element("li")?;
        li.set_attribute("data-index", &entry.index.to_string())?;
        li.set_attribute("data-lat", &entry.latitude)?;
        li.set_attribute("data-lon", &entry.longitude)?;
        let event_json =
            serde_json::to_string(&entry.event).map_err(|e| JsValue::from_str(&e.to_string()))?;
        li.set_attribute("data-event", &event_json)?;

        for (class, text) in [
            ("mag", &entry.magnitude),
            ("region", &entry.region),
            ("time", &entry.time),
            ("lat", &entry.latitude),
            ("lon", &entry.longitude),
        ] {
            let span = self.document.create_element("span")?;
            span.set_class_name(class);
            span.set_text_content(Some(text.as_str()));
            li.append_child(&span)?;
        }
        Ok(li)
    }
}

fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        web_sys::console::log_1(&JsValue::from_str(&format!("panel update failed: {err:?}")));
    }
}

impl PanelSurface for DomSurface {
    fn set_detail_field(&mut self, field: DetailField, text: &str) {
        report(
            self.query(&format!("#{DETAIL_ID} [data-field=\"{}\"]", field.key()))
                .map(|el| el.set_text_content(Some(text))),
        );
    }

    fn set_detail_visible(&mut self, visible: bool) {
        report(
            self.by_id(DETAIL_ID)
                .and_then(|el| el.class_list().toggle_with_force("hidden", !visible).map(|_| ())),
        );
    }

    fn clear_list(&mut self) {
        report(self.by_id(LIST_ID).map(|el| el.set_inner_html("")));
    }

    fn push_list_entry(&mut self, entry: &ListEntry) {
        report((|| {
            let list = self.by_id(LIST_ID)?;
            let li = self.list_item(entry)?;
            list.append_child(&li)?;
            Ok(())
        })());
    }

    fn set_drawer_open(&mut self, drawer: Drawer, open: bool) {
        report(
            self.query(&format!("[data-drawer=\"{}\"]", drawer.key()))
                .and_then(|el| el.class_list().toggle_with_force("open", open).map(|_| ())),
        );
    }
}
