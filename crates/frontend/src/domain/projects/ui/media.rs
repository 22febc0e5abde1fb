//! Project preview media: still or animated images, and muted looping video
//! with play/pause and mute controls.

use crate::shared::config::use_site_config;
use crate::shared::icons::icon;
use crate::system::session::use_session;
use contracts::domain::catalog::{Media, MediaKind};
use leptos::html::Video;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;

#[component]
pub fn ProjectMedia(media: Media, alt: &'static str) -> impl IntoView {
    let config = use_site_config();
    let src = config.asset_url(media.src);

    match media.kind {
        MediaKind::Image | MediaKind::AnimatedImage => {
            let decoding = config.site.optimize_images.then_some("async");
            view! {
                <div class="project-media">
                    <img
                        class="project-media__image"
                        src=src
                        alt=alt
                        loading="lazy"
                        decoding=decoding
                    />
                </div>
            }
            .into_any()
        }
        MediaKind::Video => {
            let poster = media.poster.map(|p| config.asset_url(p));
            view! { <VideoPreview src=src poster=poster alt=alt /> }.into_any()
        }
    }
}

#[component]
fn VideoPreview(src: String, poster: Option<String>, alt: &'static str) -> impl IntoView {
    let session = use_session();
    let video_ref = NodeRef::<Video>::new();
    let (playing, set_playing) = signal(false);
    let (muted, set_muted) = signal(true);
    let (hovering, set_hovering) = signal(false);

    let toggle_play = move || {
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        if !video.paused() {
            let _ = video.pause();
            return;
        }
        match video.play() {
            Ok(promise) => spawn_local(async move {
                // the browser may refuse playback; `playing` follows the media events
                if let Err(err) = JsFuture::from(promise).await {
                    log::warn!("Video playback refused: {:?}", err);
                }
            }),
            Err(err) => log::warn!("Video playback failed: {:?}", err),
        }
    };

    let toggle_mute = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        let Some(video) = video_ref.get_untracked() else {
            return;
        };
        let next = !muted.get_untracked();
        video.set_muted(next);
        set_muted.set(next);
    };

    view! {
        <div
            class="project-media project-media--video"
            on:mouseenter=move |_| set_hovering.set(true)
            on:mouseleave=move |_| set_hovering.set(false)
        >
            <video
                node_ref=video_ref
                class="project-media__video"
                src=src
                poster=poster
                aria-label=alt
                muted=true
                loop=true
                playsinline=true
                on:click=move |_| toggle_play()
                on:play=move |_| set_playing.set(true)
                on:pause=move |_| set_playing.set(false)
                on:ended=move |_| set_playing.set(false)
            ></video>

            <div
                class=move || {
                    if hovering.get() || !playing.get() {
                        "project-media__overlay"
                    } else {
                        "project-media__overlay project-media__overlay--hidden"
                    }
                }
                on:click=move |_| toggle_play()
            >
                <Show when=move || !playing.get()>
                    <button
                        class="project-media__play"
                        aria-label=move || session.t("media.play")
                    >
                        {icon("play")}
                    </button>
                </Show>
            </div>

            <div class=move || {
                if hovering.get() {
                    "project-media__controls"
                } else {
                    "project-media__controls project-media__controls--hidden"
                }
            }>
                <button
                    class="project-media__control"
                    on:click=toggle_mute
                    aria-label=move || {
                        if muted.get() { session.t("media.unmute") } else { session.t("media.mute") }
                    }
                >
                    {move || if muted.get() { icon("volume-x") } else { icon("volume") }}
                </button>
                <Show when=move || playing.get()>
                    <button
                        class="project-media__control"
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            ev.stop_propagation();
                            toggle_play();
                        }
                        aria-label=move || session.t("media.pause")
                    >
                        {icon("pause")}
                    </button>
                </Show>
            </div>
        </div>
    }
}
