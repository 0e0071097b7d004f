//! Direct2D window rendering.
//!
//! Draws the rotating background image, the translucent panels and all
//! static text (title, headers, banner, selected game). Child controls are
//! separate windows and paint themselves.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use windows::core::{w, Result, PCWSTR};
use windows::Win32::Foundation::{E_POINTER, GENERIC_READ, HWND};
use windows::Win32::Graphics::Direct2D::Common::{D2D_RECT_F, D2D_SIZE_U};
use windows::Win32::Graphics::Direct2D::{
    D2D1CreateFactory, ID2D1Bitmap, ID2D1Factory, ID2D1HwndRenderTarget, ID2D1RenderTarget,
    D2D1_ANTIALIAS_MODE_ALIASED, D2D1_BITMAP_INTERPOLATION_MODE_LINEAR,
    D2D1_DRAW_TEXT_OPTIONS_CLIP, D2D1_FACTORY_TYPE_SINGLE_THREADED,
    D2D1_HWND_RENDER_TARGET_PROPERTIES, D2D1_PRESENT_OPTIONS_NONE,
    D2D1_RENDER_TARGET_PROPERTIES, D2D1_ROUNDED_RECT,
};
use windows::Win32::Graphics::DirectWrite::{
    DWriteCreateFactory, IDWriteFactory, IDWriteTextFormat, DWRITE_FACTORY_TYPE_SHARED,
    DWRITE_FONT_STRETCH_NORMAL, DWRITE_FONT_STYLE_NORMAL, DWRITE_FONT_WEIGHT,
    DWRITE_FONT_WEIGHT_BOLD, DWRITE_FONT_WEIGHT_NORMAL, DWRITE_MEASURING_MODE_NATURAL,
    DWRITE_PARAGRAPH_ALIGNMENT_CENTER, DWRITE_TEXT_ALIGNMENT_CENTER,
    DWRITE_TEXT_ALIGNMENT_LEADING, DWRITE_WORD_WRAPPING_WRAP,
};
use windows::Win32::Graphics::Imaging::{
    CLSID_WICImagingFactory, GUID_WICPixelFormat32bppPBGRA, IWICFormatConverter,
    IWICImagingFactory, WICBitmapDitherTypeNone, WICBitmapPaletteTypeMedianCut,
    WICDecodeMetadataCacheOnDemand,
};
use windows::Win32::System::Com::{CoCreateInstance, CLSCTX_INPROC_SERVER};
use windows_numerics::Matrix3x2;

use super::theme::{self, Rgba};
use crate::animation::{Affine, BackgroundFrame};
use crate::app::{GameDetails, WindowLayout};
use crate::model::constants::{FALLBACK_BACKGROUND, WINDOW_TITLE};
use crate::model::{Rect, Size};
use crate::platform::windows::wide_path;
use crate::tr_key;

thread_local! {
    pub static D2D_FACTORY: RefCell<Option<ID2D1Factory>> = const { RefCell::new(None) };
    pub static DWRITE_FACTORY: RefCell<Option<IDWriteFactory>> = const { RefCell::new(None) };
    pub static WIC_FACTORY: RefCell<Option<IWICImagingFactory>> = const { RefCell::new(None) };
    static RENDERER: RefCell<Option<Renderer>> = const { RefCell::new(None) };
}

/// Everything needed to paint one frame.
pub struct Scene<'a> {
    pub background: &'a Path,
    pub frame: Option<BackgroundFrame>,
    pub layout: &'a WindowLayout,
    pub details: &'a GameDetails,
    pub ru: bool,
}

struct TextFormats {
    title: IDWriteTextFormat,
    header: IDWriteTextFormat,
    banner: IDWriteTextFormat,
    name: IDWriteTextFormat,
    path: IDWriteTextFormat,
}

/// Device-dependent resources, rebuilt when the target is lost.
struct Renderer {
    target: ID2D1HwndRenderTarget,
    formats: TextFormats,
    background: Option<(PathBuf, ID2D1Bitmap)>,
    icon: Option<(PathBuf, ID2D1Bitmap)>,
}

/// Create the Direct2D, DirectWrite and WIC factories. COM must already be
/// initialized on this thread.
pub fn init_factories() -> Result<()> {
    unsafe {
        let d2d: ID2D1Factory = D2D1CreateFactory(D2D1_FACTORY_TYPE_SINGLE_THREADED, None)?;
        D2D_FACTORY.with(|f| *f.borrow_mut() = Some(d2d));

        let dwrite: IDWriteFactory = DWriteCreateFactory(DWRITE_FACTORY_TYPE_SHARED)?;
        DWRITE_FACTORY.with(|f| *f.borrow_mut() = Some(dwrite));

        let wic: IWICImagingFactory =
            CoCreateInstance(&CLSID_WICImagingFactory, None, CLSCTX_INPROC_SERVER)?;
        WIC_FACTORY.with(|f| *f.borrow_mut() = Some(wic));
    }
    Ok(())
}

/// Drop every Direct2D resource and factory.
pub fn release_factories() {
    RENDERER.with(|r| *r.borrow_mut() = None);
    WIC_FACTORY.with(|f| *f.borrow_mut() = None);
    DWRITE_FACTORY.with(|f| *f.borrow_mut() = None);
    D2D_FACTORY.with(|f| *f.borrow_mut() = None);
}

/// Pixel size of an image file, or `None` if it cannot be decoded.
pub fn image_size(path: &Path) -> Option<Size> {
    let converter = match unsafe { decode(path) } {
        Ok(c) => c,
        Err(e) => {
            warn!("Background image {} not loaded: {}", path.display(), e);
            return None;
        }
    };
    let (mut width, mut height) = (0u32, 0u32);
    unsafe { converter.GetSize(&mut width, &mut height) }.ok()?;
    Some(Size::new(width as i32, height as i32))
}

/// Match the render target to a new client size.
pub fn resize(size: Size) {
    RENDERER.with(|r| {
        if let Some(renderer) = r.borrow().as_ref() {
            let pixel_size = D2D_SIZE_U {
                width: size.width.max(0) as u32,
                height: size.height.max(0) as u32,
            };
            unsafe {
                let _ = renderer.target.Resize(&pixel_size);
            }
        }
    });
}

/// Draw `scene` into `hwnd`. Must be called between BeginPaint/EndPaint.
pub fn paint(hwnd: HWND, scene: &Scene) {
    RENDERER.with(|r| {
        let mut slot = r.borrow_mut();
        if slot.is_none() {
            match unsafe { Renderer::create(hwnd, scene.layout.client) } {
                Ok(renderer) => *slot = Some(renderer),
                Err(e) => {
                    warn!("Failed to create render target: {}", e);
                    return;
                }
            }
        }

        let lost = match slot.as_mut() {
            Some(renderer) => unsafe { renderer.draw(scene) }.is_err(),
            None => false,
        };
        if lost {
            debug!("Render target lost; recreating on next paint");
            *slot = None;
        }
    });
}

impl Renderer {
    unsafe fn create(hwnd: HWND, client: Size) -> Result<Self> {
        let factory = D2D_FACTORY
            .with(|f| f.borrow().clone())
            .ok_or_else(|| windows::core::Error::from(E_POINTER))?;

        let hwnd_props = D2D1_HWND_RENDER_TARGET_PROPERTIES {
            hwnd,
            pixelSize: D2D_SIZE_U {
                width: client.width.max(1) as u32,
                height: client.height.max(1) as u32,
            },
            presentOptions: D2D1_PRESENT_OPTIONS_NONE,
        };
        let target =
            factory.CreateHwndRenderTarget(&D2D1_RENDER_TARGET_PROPERTIES::default(), &hwnd_props)?;

        Ok(Self {
            target,
            formats: create_text_formats()?,
            background: None,
            icon: None,
        })
    }

    unsafe fn draw(&mut self, scene: &Scene) -> Result<()> {
        let background = cached_bitmap(&self.target, &mut self.background, Some(scene.background));
        let icon = cached_bitmap(&self.target, &mut self.icon, scene.details.icon.as_deref());

        let rt: &ID2D1RenderTarget = &self.target;
        let layout = scene.layout;

        rt.BeginDraw();
        rt.SetTransform(&to_matrix(&Affine::IDENTITY));

        let (r, g, b) = FALLBACK_BACKGROUND;
        rt.Clear(Some(&Rgba(r, g, b, 255).d2d()));

        if let (Some(frame), Some(bitmap)) = (scene.frame, background.as_ref()) {
            rt.PushAxisAlignedClip(&rect_f(frame.clip), D2D1_ANTIALIAS_MODE_ALIASED);
            rt.SetTransform(&to_matrix(&frame.transform));
            let dest = rect_f(Rect::from_size(frame.image));
            rt.DrawBitmap(
                bitmap,
                Some(&dest),
                1.0,
                D2D1_BITMAP_INTERPOLATION_MODE_LINEAR,
                None,
            );
            rt.SetTransform(&to_matrix(&Affine::IDENTITY));
            rt.PopAxisAlignedClip();
        }

        fill(rt, Rect::from_size(layout.client), theme::WINDOW_TINT, 0.0);
        fill(rt, layout.library_panel, theme::PANEL, 8.0);
        fill(rt, layout.details_panel, theme::PANEL, 8.0);
        fill(
            rt,
            Rect::new(
                layout.library_panel.right(),
                layout.library_panel.y,
                layout.details_panel.x - layout.library_panel.right(),
                layout.library_panel.height,
            ),
            theme::SPLITTER,
            0.0,
        );
        fill(rt, layout.banner, theme::BANNER, 8.0);

        let f = &self.formats;
        text(rt, WINDOW_TITLE, &f.title, layout.title, theme::TITLE_TEXT);
        text(rt, &tr_key("My games", scene.ru), &f.header, layout.library_header, theme::HEADER_TEXT);
        text(rt, &tr_key("Game details", scene.ru), &f.header, layout.details_header, theme::HEADER_TEXT);
        text(rt, &tr_key("Game banner", scene.ru), &f.banner, layout.banner, theme::BANNER_TEXT);
        text(rt, &scene.details.name, &f.name, layout.name, theme::TITLE_TEXT);
        text(rt, &scene.details.path, &f.path, layout.path, theme::PATH_TEXT);

        if let Some(bitmap) = icon.as_ref() {
            rt.DrawBitmap(
                bitmap,
                Some(&rect_f(layout.icon)),
                1.0,
                D2D1_BITMAP_INTERPOLATION_MODE_LINEAR,
                None,
            );
        }

        rt.EndDraw(None, None)
    }
}

/// Return the bitmap for `path`, decoding it only when the path changed.
unsafe fn cached_bitmap(
    target: &ID2D1HwndRenderTarget,
    cache: &mut Option<(PathBuf, ID2D1Bitmap)>,
    path: Option<&Path>,
) -> Option<ID2D1Bitmap> {
    let path = match path {
        Some(p) => p,
        None => {
            *cache = None;
            return None;
        }
    };
    if let Some((cached, bitmap)) = cache.as_ref() {
        if cached == path {
            return Some(bitmap.clone());
        }
    }
    let bitmap = decode(path)
        .and_then(|converter| target.CreateBitmapFromWicBitmap(&converter, None))
        .map_err(|e| debug!("Cannot load {}: {}", path.display(), e))
        .ok()?;
    *cache = Some((path.to_path_buf(), bitmap.clone()));
    Some(bitmap)
}

/// Decode the first frame of an image file as premultiplied BGRA.
unsafe fn decode(path: &Path) -> Result<IWICFormatConverter> {
    let wic = WIC_FACTORY
        .with(|f| f.borrow().clone())
        .ok_or_else(|| windows::core::Error::from(E_POINTER))?;
    let file = wide_path(path);
    let decoder = wic.CreateDecoderFromFilename(
        PCWSTR(file.as_ptr()),
        None,
        GENERIC_READ,
        WICDecodeMetadataCacheOnDemand,
    )?;
    let frame = decoder.GetFrame(0)?;
    let converter = wic.CreateFormatConverter()?;
    converter.Initialize(
        &frame,
        &GUID_WICPixelFormat32bppPBGRA,
        WICBitmapDitherTypeNone,
        None,
        0.0,
        WICBitmapPaletteTypeMedianCut,
    )?;
    Ok(converter)
}

unsafe fn create_text_formats() -> Result<TextFormats> {
    let dwrite = DWRITE_FACTORY
        .with(|f| f.borrow().clone())
        .ok_or_else(|| windows::core::Error::from(E_POINTER))?;

    let make = |size: f32, weight: DWRITE_FONT_WEIGHT, centered: bool| -> Result<IDWriteTextFormat> {
        let format = dwrite.CreateTextFormat(
            w!("Segoe UI"),
            None,
            weight,
            DWRITE_FONT_STYLE_NORMAL,
            DWRITE_FONT_STRETCH_NORMAL,
            size,
            w!(""),
        )?;
        format.SetParagraphAlignment(DWRITE_PARAGRAPH_ALIGNMENT_CENTER)?;
        format.SetTextAlignment(if centered {
            DWRITE_TEXT_ALIGNMENT_CENTER
        } else {
            DWRITE_TEXT_ALIGNMENT_LEADING
        })?;
        format.SetWordWrapping(DWRITE_WORD_WRAPPING_WRAP)?;
        Ok(format)
    };

    Ok(TextFormats {
        title: make(24.0, DWRITE_FONT_WEIGHT_BOLD, false)?,
        header: make(16.0, DWRITE_FONT_WEIGHT_BOLD, false)?,
        banner: make(18.0, DWRITE_FONT_WEIGHT_NORMAL, true)?,
        name: make(26.0, DWRITE_FONT_WEIGHT_BOLD, false)?,
        path: make(13.0, DWRITE_FONT_WEIGHT_NORMAL, false)?,
    })
}

unsafe fn fill(rt: &ID2D1RenderTarget, rect: Rect, color: Rgba, radius: f32) {
    if rect.width <= 0 || rect.height <= 0 {
        return;
    }
    if let Ok(brush) = rt.CreateSolidColorBrush(&color.d2d(), None) {
        let rounded = D2D1_ROUNDED_RECT {
            rect: rect_f(rect),
            radiusX: radius,
            radiusY: radius,
        };
        rt.FillRoundedRectangle(&rounded, &brush);
    }
}

unsafe fn text(rt: &ID2D1RenderTarget, s: &str, format: &IDWriteTextFormat, rect: Rect, color: Rgba) {
    if s.is_empty() || rect.width <= 0 {
        return;
    }
    let utf16: Vec<u16> = s.encode_utf16().collect();
    if let Ok(brush) = rt.CreateSolidColorBrush(&color.d2d(), None) {
        rt.DrawText(
            &utf16,
            format,
            &rect_f(rect),
            &brush,
            D2D1_DRAW_TEXT_OPTIONS_CLIP,
            DWRITE_MEASURING_MODE_NATURAL,
        );
    }
}

fn rect_f(rect: Rect) -> D2D_RECT_F {
    D2D_RECT_F {
        left: rect.x as f32,
        top: rect.y as f32,
        right: rect.right() as f32,
        bottom: rect.bottom() as f32,
    }
}

fn to_matrix(t: &Affine) -> Matrix3x2 {
    Matrix3x2 {
        M11: t.m11,
        M12: t.m12,
        M21: t.m21,
        M22: t.m22,
        M31: t.m31,
        M32: t.m32,
    }
}
