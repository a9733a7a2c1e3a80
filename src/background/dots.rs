//! Browser bindings for the dot-field effect.
//!
//! Both libraries are fetched with a dynamic `import()`. The renderer module
//! is kept in [`DotsLibrary`] and handed to the effect constructor as the
//! `THREE` option rather than being published on `window`.

use js_sys::{Function, Promise, Reflect, JSON};
use leptos::task::spawn_local;
use log::debug;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlElement;

use super::{BackgroundConfig, DotsOptions, EffectError, EffectHandle, EffectLoader, LoadCallback};

#[wasm_bindgen(inline_js = "export function import_module(id) { return import(id); }")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn import_module(id: &str) -> Result<Promise, JsValue>;
}

/// Loaded renderer namespace plus the effect's constructor.
pub struct DotsLibrary {
    renderer: JsValue,
    factory: Function,
}

pub struct DotsLoader {
    renderer_module: String,
    effect_module: String,
    options: DotsOptions,
}

impl DotsLoader {
    pub fn from_config(config: &BackgroundConfig) -> Self {
        Self {
            renderer_module: config.renderer_module.clone(),
            effect_module: config.effect_module.clone(),
            options: config.dots.clone(),
        }
    }

    fn build_options(&self, library: &DotsLibrary, target: &HtmlElement) -> Result<JsValue, JsValue> {
        let json = serde_json::to_string(&self.options)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        let options = JSON::parse(&json)?;
        Reflect::set(&options, &JsValue::from_str("el"), target)?;
        Reflect::set(&options, &JsValue::from_str("THREE"), &library.renderer)?;
        Ok(options)
    }
}

impl EffectLoader for DotsLoader {
    type Library = DotsLibrary;
    type Target = HtmlElement;
    type Handle = DotsEffect;

    fn load(&self, done: LoadCallback<DotsLibrary>) {
        let renderer_module = self.renderer_module.clone();
        let effect_module = self.effect_module.clone();
        spawn_local(async move {
            done(load_library(&renderer_module, &effect_module).await);
        });
    }

    fn construct(&self, library: DotsLibrary, target: &HtmlElement) -> Result<DotsEffect, EffectError> {
        let options = self
            .build_options(&library, target)
            .map_err(|err| EffectError::Construct(describe(&err)))?;
        let effect = library
            .factory
            .call1(&JsValue::NULL, &options)
            .map_err(|err| EffectError::Construct(describe(&err)))?;
        if !effect.is_object() {
            return Err(EffectError::Construct(
                "constructor returned no effect".to_string(),
            ));
        }
        Ok(DotsEffect { effect })
    }
}

async fn import(module: &str) -> Result<JsValue, EffectError> {
    let load_err = |err: JsValue| EffectError::Load {
        module: module.to_string(),
        reason: describe(&err),
    };
    let promise = import_module(module).map_err(load_err)?;
    JsFuture::from(promise).await.map_err(load_err)
}

async fn load_library(renderer_module: &str, effect_module: &str) -> Result<DotsLibrary, EffectError> {
    let renderer = import(renderer_module).await?;
    let module = import(effect_module).await?;
    let factory = Reflect::get(&module, &JsValue::from_str("default"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or_else(|| EffectError::Unusable(effect_module.to_string()))?;
    debug!("loaded {renderer_module} and {effect_module}");
    Ok(DotsLibrary { renderer, factory })
}

/// A live dot-field instance.
pub struct DotsEffect {
    effect: JsValue,
}

impl DotsEffect {
    fn call(&self, method: &str) -> Result<(), JsValue> {
        let method: Function = Reflect::get(&self.effect, &JsValue::from_str(method))?.dyn_into()?;
        method.call0(&self.effect)?;
        Ok(())
    }
}

impl EffectHandle for DotsEffect {
    fn resize(&mut self) -> Result<(), EffectError> {
        self.call("resize")
            .map_err(|err| EffectError::Resize(describe(&err)))
    }

    fn destroy(&mut self) -> Result<(), EffectError> {
        self.call("destroy")
            .map_err(|err| EffectError::Destroy(describe(&err)))
    }
}

fn describe(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{err:?}")
}
