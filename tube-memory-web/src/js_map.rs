//! [`MapWidget`] over a MapLibre `Map` object.
//!
//! Calls go through `Reflect` so the bridge doesn't need typed bindings
//! for MapLibre. Values cross the boundary as JSON.

use js_sys::{Array, Function, JSON, Reflect};
use serde_json::{Value, json};
use tube_memory::map::{Camera, LayerSpec, MapError, MapWidget, SourceSpec};
use wasm_bindgen::{JsCast, JsValue};

/// A MapLibre map held by the page.
#[derive(Debug, Clone)]
pub struct JsMap {
    map: JsValue,
}

fn widget_error(context: &str, err: JsValue) -> MapError {
    let detail = err
        .as_string()
        .or_else(|| {
            Reflect::get(&err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{err:?}"));
    MapError::Widget(format!("{context}: {detail}"))
}

fn to_js(value: &Value) -> Result<JsValue, MapError> {
    let text = serde_json::to_string(value).map_err(|e| MapError::Widget(e.to_string()))?;
    JSON::parse(&text).map_err(|e| widget_error("JSON.parse", e))
}

fn from_js(value: &JsValue) -> Option<Value> {
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let text = JSON::stringify(value).ok()?.as_string()?;
    serde_json::from_str(&text).ok()
}

fn optional_str(value: Option<&str>) -> JsValue {
    value.map(JsValue::from_str).unwrap_or(JsValue::UNDEFINED)
}

impl JsMap {
    pub fn new(map: JsValue) -> Self {
        Self { map }
    }

    fn call_on(target: &JsValue, method: &str, args: &[JsValue]) -> Result<JsValue, MapError> {
        let function: Function = Reflect::get(target, &JsValue::from_str(method))
            .map_err(|e| widget_error(method, e))?
            .dyn_into()
            .map_err(|_| MapError::Widget(format!("{method} is not a function")))?;
        let args: Array = args.iter().collect();
        function
            .apply(target, &args)
            .map_err(|e| widget_error(method, e))
    }

    fn call(&self, method: &str, args: &[JsValue]) -> Result<JsValue, MapError> {
        Self::call_on(&self.map, method, args)
    }

    /// Whether the style has finished loading.
    pub fn is_loaded(&self) -> bool {
        self.call("loaded", &[]).is_ok_and(|v| v.as_bool() == Some(true))
    }

    /// Register `handler` for a map event such as `load`.
    pub fn on(&self, event: &str, handler: &Function) -> Result<(), MapError> {
        self.call("on", &[JsValue::from_str(event), JsValue::from(handler.clone())])
            .map(|_| ())
    }

    fn lookup(&self, method: &str, id: &str) -> Option<JsValue> {
        self.call(method, &[JsValue::from_str(id)])
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
    }
}

impl MapWidget for JsMap {
    fn add_source(&mut self, id: &str, source: SourceSpec) -> Result<(), MapError> {
        if self.has_source(id) {
            return Err(MapError::DuplicateSource(id.to_string()));
        }
        let spec = serde_json::to_value(&source).map_err(|e| MapError::Widget(e.to_string()))?;
        self.call("addSource", &[JsValue::from_str(id), to_js(&spec)?])
            .map(|_| ())
    }

    fn add_layer(&mut self, layer: LayerSpec, before: Option<&str>) -> Result<(), MapError> {
        if self.has_layer(&layer.id) {
            return Err(MapError::DuplicateLayer(layer.id));
        }
        if !self.has_source(&layer.source) {
            return Err(MapError::UnknownSource(layer.source));
        }
        self.call("addLayer", &[to_js(&layer.to_value())?, optional_str(before)])
            .map(|_| ())
    }

    fn has_layer(&self, id: &str) -> bool {
        self.lookup("getLayer", id).is_some()
    }

    fn has_source(&self, id: &str) -> bool {
        self.lookup("getSource", id).is_some()
    }

    fn set_source_data(&mut self, id: &str, data: Value) -> Result<(), MapError> {
        let source = self
            .lookup("getSource", id)
            .ok_or_else(|| MapError::UnknownSource(id.to_string()))?;
        Self::call_on(&source, "setData", &[to_js(&data)?]).map(|_| ())
    }

    fn paint_property(&self, layer: &str, property: &str) -> Option<Value> {
        if !self.has_layer(layer) {
            return None;
        }
        let value = self
            .call(
                "getPaintProperty",
                &[JsValue::from_str(layer), JsValue::from_str(property)],
            )
            .ok()?;
        from_js(&value)
    }

    fn set_paint_property(
        &mut self,
        layer: &str,
        property: &str,
        value: Value,
    ) -> Result<(), MapError> {
        if !self.has_layer(layer) {
            return Err(MapError::UnknownLayer(layer.to_string()));
        }
        self.call(
            "setPaintProperty",
            &[JsValue::from_str(layer), JsValue::from_str(property), to_js(&value)?],
        )
        .map(|_| ())
    }

    fn move_layer(&mut self, id: &str, before: Option<&str>) -> Result<(), MapError> {
        if !self.has_layer(id) {
            return Err(MapError::UnknownLayer(id.to_string()));
        }
        if let Some(before) = before
            && !self.has_layer(before)
        {
            return Err(MapError::UnknownLayer(before.to_string()));
        }
        self.call("moveLayer", &[JsValue::from_str(id), optional_str(before)])
            .map(|_| ())
    }

    fn fly_to(&mut self, camera: Camera) {
        let options = json!({
            "center": camera.center.to_array(),
            "zoom": camera.zoom,
        });
        let result = to_js(&options).and_then(|opts| self.call("flyTo", &[opts]));
        if let Err(e) = result {
            tracing::warn!(error = %e, "flyTo failed");
        }
    }
}
