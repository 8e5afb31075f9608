//! traveldb-wasm — the browser search widget for traveldb-core
//!
//! This crate exposes a small JS/WASM API built on top of `traveldb-core`
//! and wires up the search page: it fetches the travel dataset, matches a
//! keyword against it, and renders destination cards into the results
//! region.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (via `#[wasm_bindgen(start)]`):
//!   hooks the search button, the clear button, and the Enter key.
//! - UI entry points: `search_recommendations()`, `clear_results()`
//! - Programmatic helpers returning JSON-serializable objects:
//!   - `search("beach" | "temple" | "bali" | ...)` → array of card views
//!   - `get_stats()` → collection counts
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { search } from 'traveldb-wasm';
//!
//! async function main() {
//!   await init(); // wires the page if the widget elements exist
//!   const cards = await search('beaches');
//!   // cards is a JSON array: { category, name, description, image_url, country }
//!   console.log(cards);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The dataset is fetched fresh on every search from
//!   `travel_recommendation_api.json`, resolved relative to the page. There
//!   is no cache and no retry; any load failure logs, alerts the user, and
//!   leaves the results region in an error state.
//! - Page markup is external: the widget addresses `#search-input`,
//!   `#results-container`, `.btn-search`, and `.btn-clear`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Event, HtmlElement, HtmlInputElement, KeyboardEvent, Response};

// Core Imports
use serde_wasm_bindgen::to_value;
use traveldb_core::prelude::{
    CardView, Category, DefaultBackend, DefaultTravelDb, Hit, Recommendation, TravelDb,
    TravelSearch,
};

/// Fixed relative path of the dataset, resolved against the page URL.
const DATA_URL: &str = "travel_recommendation_api.json";

const SEARCH_INPUT_ID: &str = "search-input";
const RESULTS_CONTAINER_ID: &str = "results-container";
const SEARCH_BUTTON_SELECTOR: &str = ".btn-search";
const CLEAR_BUTTON_SELECTOR: &str = ".btn-clear";

/// Fallback shown when a card image fails to load.
const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/350x220?text=No+Image";

/// Clear animation: fade out, then empty the region after this delay.
const CLEAR_FADE_MS: i32 = 300;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing travel recommendation widget...".into());

    // The module can also be loaded purely for the programmatic API, so a
    // page without the widget elements is not an error.
    if let Ok(document) = document() {
        wire_events(&document)?;
    }
    Ok(())
}

/// Hook up the search/clear buttons and the Enter key.
fn wire_events(document: &Document) -> Result<(), JsValue> {
    if let Some(btn) = document.query_selector(SEARCH_BUTTON_SELECTOR)? {
        let on_click = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
            e.prevent_default();
            spawn_search();
        });
        btn.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    if let Some(btn) = document.query_selector(CLEAR_BUTTON_SELECTOR)? {
        let on_click = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
            e.prevent_default();
            if let Err(err) = clear_results() {
                web_sys::console::error_1(&err);
            }
        });
        btn.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    if let Some(input) = document.get_element_by_id(SEARCH_INPUT_ID) {
        let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                spawn_search();
            }
        });
        input.add_event_listener_with_callback("keypress", on_key.as_ref().unchecked_ref())?;
        on_key.forget();
    }

    Ok(())
}

fn spawn_search() {
    spawn_local(async {
        if let Err(err) = search_recommendations().await {
            web_sys::console::error_1(&err);
        }
    });
}

/* --------------------------------------------------------------------------
   Data Loading
-------------------------------------------------------------------------- */

/// Fetch and parse the dataset. Fresh on every call.
async fn fetch_travel_data() -> Result<DefaultTravelDb, JsValue> {
    let resp_value = JsFuture::from(window()?.fetch_with_str(DATA_URL)).await?;
    let resp: Response = resp_value.dyn_into()?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "failed to fetch {DATA_URL}: HTTP {}",
            resp.status()
        )));
    }

    let text = JsFuture::from(resp.text()?).await?;
    let text = text.as_string().unwrap_or_default();
    TravelDb::from_json_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))
}

/* --------------------------------------------------------------------------
   UI Entry Points
-------------------------------------------------------------------------- */

/// The full search flow of the widget: validate the input, show the loading
/// state, fetch the dataset, match, and render.
#[wasm_bindgen]
pub async fn search_recommendations() -> Result<(), JsValue> {
    let document = document()?;
    let keyword = search_input(&document)?.value().trim().to_string();

    if keyword.is_empty() {
        alert("Please enter a search term (e.g. beach, temple, or country)")?;
        return Ok(());
    }

    let container = results_container(&document)?;
    container.set_inner_html("<div class=\"loading\">Searching...</div>");

    // A failed load never propagates past this boundary: log, alert, and
    // leave the results region in the error state.
    let db = match fetch_travel_data().await {
        Ok(db) => db,
        Err(err) => {
            web_sys::console::error_2(&"Error fetching data:".into(), &err);
            alert("Error loading travel data. Please make sure travel_recommendation_api.json exists.")?;
            container.set_inner_html("<div class=\"no-results\"><h2>Error loading data</h2></div>");
            return Ok(());
        }
    };

    let recommendation = db.recommend(&keyword);
    render_recommendations(&document, &recommendation)
}

/// Fade out and empty the results region, then clear and refocus the input.
#[wasm_bindgen]
pub fn clear_results() -> Result<(), JsValue> {
    let document = document()?;
    let container = results_container(&document)?;

    container.style().set_property("opacity", "0")?;

    let delayed = container.clone();
    let restore = Closure::once_into_js(move || {
        delayed.set_inner_html("");
        let _ = delayed.style().set_property("opacity", "1");
    });
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        restore.unchecked_ref(),
        CLEAR_FADE_MS,
    )?;

    let input = search_input(&document)?;
    input.set_value("");
    input.focus()?;
    Ok(())
}

/* --------------------------------------------------------------------------
   Rendering
-------------------------------------------------------------------------- */

fn render_recommendations(
    document: &Document,
    recommendation: &Recommendation<'_, DefaultBackend>,
) -> Result<(), JsValue> {
    let container = results_container(document)?;
    container.set_inner_html("");

    if recommendation.is_empty() {
        container.set_inner_html(&format!(
            "<div class=\"no-results\">\
               <h2>No recommendations found for \"{}\"</h2>\
               <p>Try searching for: {}</p>\
             </div>",
            escape_html(&recommendation.label),
            category_hints(),
        ));
        return Ok(());
    }

    let header = document.create_element("div")?;
    header.set_class_name("results-header");
    header.set_inner_html(&format!(
        "<h2>Recommendations for \"{}\"</h2>",
        escape_html(&recommendation.label)
    ));
    container.append_child(&header)?;

    let cards = document.create_element("div")?;
    cards.set_class_name("cards-container");
    for hit in &recommendation.hits {
        cards.append_child(&create_recommendation_card(document, hit)?.into())?;
    }
    container.append_child(&cards)?;

    Ok(())
}

/// One destination card: image, name, description, and the cosmetic "Visit"
/// stub (no behavioral contract; intentionally not wired to anything).
fn create_recommendation_card(
    document: &Document,
    hit: &Hit<'_, DefaultBackend>,
) -> Result<web_sys::Element, JsValue> {
    let card = document.create_element("div")?;
    card.set_class_name("recommendation-card");

    card.set_inner_html(&format!(
        "<div class=\"card-image\">\
           <img src=\"{image}\" alt=\"{name}\" onerror=\"this.src='{placeholder}'\">\
         </div>\
         <div class=\"card-content\">\
           <h3>{name}</h3>\
           <p>{description}</p>\
           <button class=\"visit-btn\" type=\"button\">Visit</button>\
         </div>",
        image = escape_html(hit.place.image_url()),
        name = escape_html(hit.place.name()),
        description = escape_html(hit.place.description()),
        placeholder = PLACEHOLDER_IMAGE,
    ));

    Ok(card)
}

/// `beaches, temples, or countries`, each tag emphasized.
fn category_hints() -> String {
    let tags: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("<strong>{}</strong>", c.as_str()))
        .collect();
    match tags.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
        Some((last, _)) => last.clone(),
        None => String::new(),
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/* --------------------------------------------------------------------------
   Programmatic API
-------------------------------------------------------------------------- */

/// Run a search and return the matching cards as a JSON-serializable array,
/// without touching the DOM. The dataset is fetched fresh.
#[wasm_bindgen]
pub async fn search(keyword: String) -> Result<JsValue, JsValue> {
    let db = fetch_travel_data().await?;
    let recommendation = db.recommend(&keyword);

    // Map to JS serializable views while preserving order
    let array = js_sys::Array::new();
    for hit in &recommendation.hits {
        let card = CardView::from_hit(hit);
        array.push(&to_value(&card).map_err(|e| JsValue::from_str(&e.to_string()))?);
    }
    Ok(array.into())
}

/// Collection counts of the current dataset.
#[wasm_bindgen]
pub async fn get_stats() -> Result<JsValue, JsValue> {
    let db = fetch_travel_data().await?;
    to_value(&db.stats()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/* --------------------------------------------------------------------------
   DOM Helpers
-------------------------------------------------------------------------- */

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document on window"))
}

fn alert(message: &str) -> Result<(), JsValue> {
    window()?.alert_with_message(message)
}

fn search_input(document: &Document) -> Result<HtmlInputElement, JsValue> {
    document
        .get_element_by_id(SEARCH_INPUT_ID)
        .ok_or_else(|| JsValue::from_str("missing #search-input element"))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str("#search-input is not an <input>"))
}

fn results_container(document: &Document) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(RESULTS_CONTAINER_ID)
        .ok_or_else(|| JsValue::from_str("missing #results-container element"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str("#results-container is not an HTML element"))
}
