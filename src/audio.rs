use crate::constants::{
    ANALYSER_FFT_SIZE, ANALYSER_SMOOTHING, AUDIO_ELEMENT_ID, PLAYBACK_VOLUME,
};
use crate::core::{Mode, Sketch};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Bundled clip routed through an analyser: source -> analyser -> output.
pub struct AudioAnalyzer {
    audio_ctx: web::AudioContext,
    element: web::HtmlAudioElement,
    analyser: web::AnalyserNode,
    bins: Vec<u8>,
}

// Create analyser and an appropriately sized byte buffer
fn create_analyser(audio_ctx: &web::AudioContext) -> anyhow::Result<(web::AnalyserNode, Vec<u8>)> {
    let analyser = web::AnalyserNode::new(audio_ctx).map_err(|e| anyhow::anyhow!("{:?}", e))?;
    analyser.set_fft_size(ANALYSER_FFT_SIZE);
    analyser.set_smoothing_time_constant(ANALYSER_SMOOTHING);
    let bins = vec![0u8; analyser.frequency_bin_count() as usize];
    Ok((analyser, bins))
}

impl AudioAnalyzer {
    pub fn build(document: &web::Document) -> anyhow::Result<Self> {
        let element = document
            .get_element_by_id(AUDIO_ELEMENT_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", AUDIO_ELEMENT_ID))?
            .dyn_into::<web::HtmlAudioElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let source = audio_ctx
            .create_media_element_source(&element)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let (analyser, bins) = create_analyser(&audio_ctx)?;
        source
            .connect_with_audio_node(&analyser)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        analyser
            .connect_with_audio_node(&audio_ctx.destination())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        log::info!("[audio] graph ready, {} bins", bins.len());
        Ok(Self {
            audio_ctx,
            element,
            analyser,
            bins,
        })
    }

    /// Rewind and play at the fixed volume.
    pub fn restart(&self) {
        _ = self.audio_ctx.resume();
        self.element.set_current_time(0.0);
        self.element.set_volume(PLAYBACK_VOLUME);
        match self.element.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::warn!("[audio] playback rejected: {:?}", e);
                }
            }),
            Err(e) => log::warn!("[audio] play error: {:?}", e),
        }
    }

    pub fn pause(&self) {
        _ = self.element.pause();
    }

    /// Pull the current byte spectrum.
    pub fn sample(&mut self) -> &[u8] {
        self.analyser.get_byte_frequency_data(&mut self.bins);
        &self.bins
    }
}

/// Lazily built analyser plus whether its frame loop is live.
#[derive(Default)]
pub struct AudioDriver {
    analyzer: Option<AudioAnalyzer>,
    running: bool,
}

/// Called when the mode switches to audio: build the graph on first use,
/// restart playback and make sure the spectrum loop is running.
pub fn enter_audio_mode(
    document: &web::Document,
    sketch: &Rc<RefCell<Sketch>>,
    driver: &Rc<RefCell<AudioDriver>>,
) {
    {
        let mut d = driver.borrow_mut();
        if d.analyzer.is_none() {
            match AudioAnalyzer::build(document) {
                Ok(a) => d.analyzer = Some(a),
                Err(e) => {
                    log::error!("[audio] init error: {:?}", e);
                    return;
                }
            }
        }
        if let Some(a) = &d.analyzer {
            a.restart();
        }
        if d.running {
            return;
        }
        d.running = true;
    }
    start_spectrum_loop(sketch.clone(), driver.clone());
}

fn start_spectrum_loop(sketch: Rc<RefCell<Sketch>>, driver: Rc<RefCell<AudioDriver>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if sketch.borrow().mode() != Mode::Audio {
            let mut d = driver.borrow_mut();
            if let Some(a) = &d.analyzer {
                a.pause();
            }
            d.running = false;
            log::info!("[audio] loop stopped");
            // releases this closure once it returns
            _ = tick_clone.borrow_mut().take();
            return;
        }
        {
            let mut d = driver.borrow_mut();
            if let Some(a) = d.analyzer.as_mut() {
                let bins = a.sample();
                sketch.borrow_mut().apply_spectrum(bins);
            }
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
