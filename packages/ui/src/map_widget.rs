//! Leaflet map driven from Rust through `document::eval`.
//!
//! The widget owns a single `div`. Leaflet is loaded from the CDN once per
//! page; after that, every change of center, zoom or markers is pushed as one
//! JSON payload and the marker layer is rebuilt from it.

use dioxus::prelude::*;
use serde::Serialize;

use crate::dashboard::{Marker, MarkerKind};

const MAP_CONTAINER_ID: &str = "safespot-map";

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const REPORT_ICON: &str =
    "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-red.png";
const DEVICE_ICON: &str =
    "https://raw.githubusercontent.com/pointhi/leaflet-color-markers/master/img/marker-icon-green.png";
const ICON_SHADOW: &str = "https://unpkg.com/leaflet@1.9.4/dist/images/marker-shadow.png";

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct MarkerPayload<'a> {
    lat: f64,
    lng: f64,
    icon: &'static str,
    label: &'a str,
    description: Option<&'a str>,
    address: Option<&'a str>,
    image_url: Option<&'a str>,
    date: Option<&'a str>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct MapPayload<'a> {
    center: [f64; 2],
    zoom: u8,
    tile_url: &'a str,
    attribution: &'a str,
    shadow_url: &'static str,
    markers: Vec<MarkerPayload<'a>>,
}

fn marker_payload(marker: &Marker) -> MarkerPayload<'_> {
    let detail = marker.detail.as_ref();
    MarkerPayload {
        lat: marker.position.latitude,
        lng: marker.position.longitude,
        icon: match marker.kind {
            MarkerKind::Report => REPORT_ICON,
            MarkerKind::Device => DEVICE_ICON,
        },
        label: &marker.label,
        description: detail.map(|d| d.description.as_str()),
        address: detail.map(|d| d.address.as_str()),
        image_url: detail.and_then(|d| d.image_url.as_deref()),
        date: detail.map(|d| d.date.as_str()),
    }
}

fn payload_json(
    center: [f64; 2],
    zoom: u8,
    markers: &[Marker],
    tile_url: &str,
    attribution: &str,
) -> String {
    let payload = MapPayload {
        center,
        zoom,
        tile_url,
        attribution,
        shadow_url: ICON_SHADOW,
        markers: markers.iter().map(marker_payload).collect(),
    };
    serde_json::to_string(&payload).unwrap_or_else(|e| {
        tracing::error!("Failed to encode map payload: {}", e);
        "null".to_string()
    })
}

fn render_js(payload: &str) -> String {
    format!(
        r#"(function() {{
            var el = document.getElementById('{MAP_CONTAINER_ID}');
            var data = {payload};
            if (!el || !data || typeof L === 'undefined') return;
            if (!el._map) {{
                el._map = L.map(el, {{ scrollWheelZoom: true }});
                L.tileLayer(data.tileUrl, {{ attribution: data.attribution }}).addTo(el._map);
                el._layer = L.layerGroup().addTo(el._map);
            }}
            el._map.setView(data.center, data.zoom);
            el._layer.clearLayers();
            data.markers.forEach(function(m) {{
                var icon = new L.Icon({{
                    iconUrl: m.icon,
                    shadowUrl: data.shadowUrl,
                    iconSize: [25, 41],
                    iconAnchor: [12, 41],
                    popupAnchor: [1, -34],
                    shadowSize: [41, 41]
                }});
                var popup = document.createElement('div');
                var title = document.createElement('strong');
                title.textContent = m.label;
                popup.appendChild(title);
                if (m.description !== null) {{
                    var desc = document.createElement('div');
                    desc.textContent = m.description;
                    popup.appendChild(desc);
                }}
                if (m.address !== null) {{
                    var addr = document.createElement('em');
                    addr.textContent = m.address;
                    popup.appendChild(addr);
                }}
                if (m.imageUrl !== null) {{
                    var img = document.createElement('img');
                    img.src = m.imageUrl;
                    img.alt = 'Report';
                    img.style.width = '100px';
                    img.style.marginTop = '5px';
                    img.style.display = 'block';
                    popup.appendChild(img);
                }}
                if (m.date !== null) {{
                    var date = document.createElement('small');
                    date.textContent = m.date;
                    popup.appendChild(date);
                }}
                L.marker([m.lat, m.lng], {{ icon: icon }}).bindPopup(popup).addTo(el._layer);
            }});
        }})();"#
    )
}

/// Interactive incident map.
#[component]
pub fn MapWidget(
    center: [f64; 2],
    zoom: u8,
    markers: Vec<Marker>,
    tile_url: String,
    attribution: String,
) -> Element {
    let mut loaded = use_signal(|| false);

    // Track the rendered payload in a signal so the effect re-runs on prop change
    let json = payload_json(center, zoom, &markers, &tile_url, &attribution);
    let mut payload = use_signal(|| json.clone());
    if *payload.peek() != json {
        payload.set(json);
    }

    // ── Load Leaflet once ──
    use_effect(move || {
        let js = format!(
            r#"(function() {{
                if (typeof L !== 'undefined') {{ dioxus.send(true); return; }}
                if (!document.getElementById('leaflet-css')) {{
                    var link = document.createElement('link');
                    link.id = 'leaflet-css';
                    link.rel = 'stylesheet';
                    link.href = '{LEAFLET_CSS}';
                    document.head.appendChild(link);
                }}
                var script = document.getElementById('leaflet-js');
                if (!script) {{
                    script = document.createElement('script');
                    script.id = 'leaflet-js';
                    script.src = '{LEAFLET_JS}';
                    document.head.appendChild(script);
                }}
                script.addEventListener('load', function() {{ dioxus.send(true); }});
                script.addEventListener('error', function() {{ dioxus.send(false); }});
            }})();"#
        );
        spawn(async move {
            let mut eval = document::eval(&js);
            match eval.recv::<bool>().await {
                Ok(true) => loaded.set(true),
                _ => tracing::error!("Failed to load the map library"),
            }
        });
    });

    // ── Push view and markers whenever either changes ──
    use_effect(move || {
        let json = payload();
        if !loaded() {
            return;
        }
        document::eval(&render_js(&json));
    });

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "map-container",
        }
    }
}
