use async_trait::async_trait;
use url::Url;

use crate::{
    foundation::{core::ImageSource, error::PixelsetResult},
    transform::breakpoint::{BreakpointTransform, ResolvedBreakpoint, scaled_height},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Image CDNs whose URLs can be rewritten to a target size.
pub enum CdnProvider {
    /// `*.imgix.net`, query `w`/`h`.
    Imgix,
    /// `res.cloudinary.com`, transformation segment after `/upload/`.
    Cloudinary,
    /// `cdn.shopify.com`, query `width`/`height`.
    Shopify,
    /// Netlify Image CDN at `/.netlify/images`, query `w`/`h`.
    Netlify,
}

impl CdnProvider {
    /// Recognize the provider serving `url`.
    pub fn detect(url: &Url) -> Option<Self> {
        let host = url.host_str()?;
        if host.ends_with(".imgix.net") {
            return Some(CdnProvider::Imgix);
        }
        if host == "res.cloudinary.com" {
            return url
                .path_segments()
                .is_some_and(|mut segs| segs.any(|s| s == "upload"))
                .then_some(CdnProvider::Cloudinary);
        }
        if host == "cdn.shopify.com" {
            return Some(CdnProvider::Shopify);
        }
        if url.path().trim_end_matches('/') == "/.netlify/images" {
            return Some(CdnProvider::Netlify);
        }
        None
    }

    /// Rewrite `url` to deliver the image at `width` (and `height`, when known).
    pub fn rewrite(self, url: &Url, width: u32, height: Option<u32>) -> String {
        let mut out = url.clone();
        match self {
            CdnProvider::Imgix => {
                let mut params = vec![("w", width.to_string())];
                if let Some(h) = height {
                    params.push(("h", h.to_string()));
                    params.push(("fit", "crop".to_string()));
                }
                set_query_params(&mut out, &params);
            }
            CdnProvider::Shopify => {
                let mut params = vec![("width", width.to_string())];
                if let Some(h) = height {
                    params.push(("height", h.to_string()));
                    params.push(("crop", "center".to_string()));
                }
                set_query_params(&mut out, &params);
            }
            CdnProvider::Netlify => {
                let mut params = vec![("w", width.to_string())];
                if let Some(h) = height {
                    params.push(("h", h.to_string()));
                    params.push(("fit", "cover".to_string()));
                }
                set_query_params(&mut out, &params);
            }
            CdnProvider::Cloudinary => {
                let mut ops = vec![format!("w_{width}")];
                if let Some(h) = height {
                    ops.push(format!("h_{h}"));
                    ops.push("c_lfill".to_string());
                }
                let segs: Vec<&str> = url
                    .path_segments()
                    .map(|s| s.collect())
                    .unwrap_or_default();
                if let Some(idx) = segs.iter().position(|s| *s == "upload") {
                    let mut new_segs: Vec<String> =
                        segs[..=idx].iter().map(|s| s.to_string()).collect();
                    let mut rest = &segs[idx + 1..];
                    if rest.first().is_some_and(|s| is_cloudinary_transformation(s)) {
                        rest = &rest[1..];
                    }
                    new_segs.push(ops.join(","));
                    new_segs.extend(rest.iter().map(|s| s.to_string()));
                    out.set_path(&format!("/{}", new_segs.join("/")));
                }
            }
        }
        out.to_string()
    }
}

fn is_cloudinary_transformation(seg: &str) -> bool {
    !seg.is_empty()
        && seg.split(',').all(|op| {
            op.split_once('_').is_some_and(|(k, v)| {
                !v.is_empty()
                    && (1..=3).contains(&k.len())
                    && k.bytes().all(|b| b.is_ascii_lowercase())
            })
        })
}

fn set_query_params(url: &mut Url, params: &[(&str, String)]) {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| !params.iter().any(|(p, _)| p == k))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    let mut q = url.query_pairs_mut();
    q.clear();
    for (k, v) in &kept {
        q.append_pair(k, v);
    }
    for (k, v) in params {
        q.append_pair(k, v);
    }
}

/// Rewrite a fully qualified CDN URL to `width`; `None` if the URL is not transformable.
pub fn transform_remote_url(src: &str, width: u32, height: Option<u32>) -> Option<String> {
    let url = Url::parse(src).ok()?;
    let provider = CdnProvider::detect(&url)?;
    Some(provider.rewrite(&url, width, height))
}

#[derive(Clone, Copy, Debug, Default)]
/// Breakpoint transform for absolute URLs served by a known image CDN.
///
/// Unrecognized URLs produce no breakpoints rather than an error.
pub struct RemoteUrlTransform;

impl RemoteUrlTransform {
    /// New transform.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl BreakpointTransform for RemoteUrlTransform {
    #[tracing::instrument(skip_all, fields(src = %image.src(), count = widths.len()))]
    async fn transform(
        &self,
        image: &ImageSource,
        widths: &[u32],
        width: Option<u32>,
        height: Option<u32>,
    ) -> PixelsetResult<Vec<ResolvedBreakpoint>> {
        let Ok(url) = Url::parse(image.src()) else {
            tracing::debug!("not an absolute url, no breakpoints");
            return Ok(Vec::new());
        };
        let Some(provider) = CdnProvider::detect(&url) else {
            tracing::debug!("no cdn rule matches, no breakpoints");
            return Ok(Vec::new());
        };
        Ok(widths
            .iter()
            .map(|&w| ResolvedBreakpoint {
                url: provider.rewrite(&url, w, scaled_height(w, width, height)),
                width: w,
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/remote.rs"]
mod tests;
