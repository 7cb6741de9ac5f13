use crate::core::{NoSpeech, SpeechError, SpeechEvent, SpeechInput};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const RECOGNIZER_NAMES: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

/// Browser speech recognizer. Handlers only enqueue; the game drains the
/// queue from inside its update.
pub struct BrowserSpeech {
    recognition: web::SpeechRecognition,
    inbox: Rc<RefCell<VecDeque<SpeechEvent>>>,
    _on_result: Closure<dyn FnMut(web::SpeechRecognitionEvent)>,
    _on_end: Closure<dyn FnMut()>,
    _on_error: Closure<dyn FnMut(web::Event)>,
}

fn recognizer_constructor(window: &web::Window) -> Option<js_sys::Function> {
    RECOGNIZER_NAMES.iter().find_map(|name| {
        js_sys::Reflect::get(window, &JsValue::from_str(name))
            .ok()
            .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
    })
}

impl BrowserSpeech {
    pub fn detect(window: &web::Window) -> Option<Self> {
        let ctor = recognizer_constructor(window)?;
        let raw = match js_sys::Reflect::construct(&ctor, &js_sys::Array::new()) {
            Ok(v) => v,
            Err(e) => {
                log::error!("[speech] constructor failed: {:?}", e);
                return None;
            }
        };
        let recognition: web::SpeechRecognition = raw.unchecked_into();
        recognition.set_continuous(false);
        recognition.set_interim_results(false);
        recognition.set_lang("en-US");

        let inbox: Rc<RefCell<VecDeque<SpeechEvent>>> = Rc::new(RefCell::new(VecDeque::new()));

        let inbox_result = inbox.clone();
        let on_result = Closure::wrap(Box::new(move |ev: web::SpeechRecognitionEvent| {
            let transcript = ev
                .results()
                .filter(|list| list.length() > 0)
                .map(|list| list.item(0))
                .filter(|res| res.length() > 0)
                .map(|res| res.item(0).transcript().to_lowercase());
            if let Some(text) = transcript {
                log::info!("[speech] recognized: {}", text);
                inbox_result
                    .borrow_mut()
                    .push_back(SpeechEvent::Transcript(text));
            }
        }) as Box<dyn FnMut(_)>);
        recognition.set_onresult(Some(on_result.as_ref().unchecked_ref()));

        let inbox_end = inbox.clone();
        let on_end = Closure::wrap(Box::new(move || {
            inbox_end.borrow_mut().push_back(SpeechEvent::Ended);
        }) as Box<dyn FnMut()>);
        recognition.set_onend(Some(on_end.as_ref().unchecked_ref()));

        let on_error = Closure::wrap(Box::new(move |ev: web::Event| {
            let code = js_sys::Reflect::get(&ev, &JsValue::from_str("error"))
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_else(|| "unknown".to_string());
            log::error!("[speech] recognition error: {}", code);
        }) as Box<dyn FnMut(_)>);
        recognition.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        Some(Self {
            recognition,
            inbox,
            _on_result: on_result,
            _on_end: on_end,
            _on_error: on_error,
        })
    }
}

impl SpeechInput for BrowserSpeech {
    fn start(&mut self) -> Result<(), SpeechError> {
        self.recognition
            .start()
            .map_err(|e| SpeechError::Start(format!("{:?}", e)))
    }

    fn stop(&mut self) {
        self.recognition.stop();
    }

    fn poll(&mut self) -> Option<SpeechEvent> {
        self.inbox.borrow_mut().pop_front()
    }
}

/// Picks the recognizer once at startup; without one the challenge runs with
/// capture disabled.
pub fn select(window: &web::Window) -> Box<dyn SpeechInput> {
    match BrowserSpeech::detect(window) {
        Some(s) => {
            log::info!("[speech] recognizer ready");
            Box::new(s)
        }
        None => {
            log::warn!("[speech] no recognizer in this browser; challenges will not be judged");
            Box::new(NoSpeech)
        }
    }
}
