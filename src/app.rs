use leptos::html::Canvas;
use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    application::ChartController,
    config::WidgetConfig,
    domain::{
        chart::ChartKind,
        events::{ChartEvent, InputEvent},
        gesture::PointerPosition,
        logging::{LogComponent, get_logger},
    },
    event_utils::{EventOptions, ListenerGroup, window_event_listener_with_options},
    global_state::globals,
    infrastructure::rendering::{CanvasSurface, JsChartAdapter, canvas_surface::context_2d},
    status_signals,
};

type HostController = ChartController<JsChartAdapter, CanvasSurface>;

status_signals! {
    offset_signal => offset: usize,
    dataset_len_signal => dataset_len: usize,
    page_signal => page: usize,
    page_count_signal => page_count: usize,
    kind_signal => chart_kind: ChartKind,
    dragging_signal => is_dragging: bool,
    status_signal => status_message: String,
}

/// Human readable window position, e.g. `"Samples 11–110 of 5000 · page 1/50"`.
pub fn window_caption(offset: usize, window_size: usize, dataset_len: usize, page: usize, page_count: usize) -> String {
    if dataset_len == 0 {
        return "No samples".to_string();
    }
    let last = (offset + window_size).min(dataset_len);
    format!(
        "Samples {}–{} of {} · page {}/{}",
        offset + 1,
        last,
        dataset_len,
        page + 1,
        page_count.max(1)
    )
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="paged-chart-app" style="font-family: sans-serif; padding: 16px;">
            <PagedChart config=WidgetConfig::default() />
        </div>
    }
}

/// Chart canvas plus a scrollbar canvas, driven by a [`ChartController`].
#[component]
pub fn PagedChart(config: WidgetConfig) -> impl IntoView {
    let chart_ref = create_node_ref::<Canvas>();
    let scrollbar_ref = create_node_ref::<Canvas>();
    let controller: Rc<RefCell<Option<HostController>>> = Rc::new(RefCell::new(None));
    let listeners = Rc::new(RefCell::new(ListenerGroup::new()));

    let dispatch: Rc<dyn Fn(InputEvent)> = {
        let controller = controller.clone();
        Rc::new(move |event: InputEvent| {
            let Ok(mut slot) = controller.try_borrow_mut() else {
                return;
            };
            let Some(ctrl) = slot.as_mut() else {
                return;
            };
            ctrl.handle(event);
            globals().apply(ctrl.status());
        })
    };

    {
        let controller = controller.clone();
        let listeners = listeners.clone();
        let dispatch = dispatch.clone();
        let config = config.clone();
        create_effect(move |mounted: Option<bool>| {
            if mounted == Some(true) {
                return true;
            }
            let (Some(chart_canvas), Some(scrollbar_canvas)) = (chart_ref.get(), scrollbar_ref.get())
            else {
                return false;
            };

            let chart_context = context_2d(&chart_canvas)
                .map_err(|e| get_logger().warn(LogComponent::Presentation("PagedChart"), &e.to_string()))
                .ok();
            let scrollbar_surface = CanvasSurface::from_canvas((*scrollbar_canvas).clone())
                .map_err(|e| get_logger().warn(LogComponent::Presentation("PagedChart"), &e.to_string()))
                .ok();

            let mut ctrl = match HostController::new(config.clone(), JsChartAdapter::new(), config.data_source()) {
                Ok(ctrl) => ctrl,
                Err(e) => {
                    globals().status_message.set(format!("❌ {}", e));
                    return true;
                }
            };
            ctrl.subscribe(|event| {
                if let ChartEvent::DataAppended { added, dataset_len, .. } = event {
                    globals()
                        .status_message
                        .set(format!("Loaded {} more samples ({} total)", added, dataset_len));
                }
            });
            match ctrl.mount(chart_context.as_ref(), scrollbar_surface) {
                Ok(()) => globals().status_message.set("✅ Chart ready".to_string()),
                Err(e) => globals().status_message.set(format!("⚠️ {}", e)),
            }
            globals().apply(ctrl.status());
            *controller.borrow_mut() = Some(ctrl);

            let mut group = listeners.borrow_mut();
            group.push(window_event_listener_with_options(ev::mousemove, &EventOptions::default(), {
                let controller = controller.clone();
                let dispatch = dispatch.clone();
                move |event: web_sys::MouseEvent| {
                    let local = controller.try_borrow().ok().and_then(|slot| {
                        slot.as_ref()
                            .filter(|ctrl| ctrl.is_dragging())
                            .and_then(|ctrl| ctrl.scrollbar_surface())
                            .map(|surface| surface.to_local(event.client_x() as f64, event.client_y() as f64))
                    });
                    if let Some((x, y)) = local {
                        dispatch(InputEvent::PointerMove(PointerPosition::new(x, y)));
                    }
                }
            }));
            group.push(window_event_listener_with_options(ev::mouseup, &EventOptions::default(), {
                let dispatch = dispatch.clone();
                move |_event: web_sys::MouseEvent| dispatch(InputEvent::PointerUp)
            }));

            get_logger().info(LogComponent::Presentation("PagedChart"), "mounted");
            true
        });
    }

    on_cleanup({
        let controller = controller.clone();
        let listeners = listeners.clone();
        move || {
            listeners.borrow_mut().remove_all();
            if let Some(mut ctrl) = controller.borrow_mut().take() {
                ctrl.unmount();
            }
        }
    });

    let on_wheel = {
        let dispatch = dispatch.clone();
        move |event: ev::WheelEvent| {
            event.prevent_default();
            dispatch(InputEvent::Wheel { delta_y: event.delta_y() });
        }
    };
    let on_scrollbar_down = {
        let dispatch = dispatch.clone();
        move |event: ev::MouseEvent| {
            event.prevent_default();
            dispatch(InputEvent::PointerDown(PointerPosition::new(
                event.offset_x() as f64,
                event.offset_y() as f64,
            )));
        }
    };
    let on_prev = {
        let dispatch = dispatch.clone();
        move |_| dispatch(InputEvent::PageBack)
    };
    let on_next = {
        let dispatch = dispatch.clone();
        move |_| dispatch(InputEvent::PageForward)
    };
    let on_toggle = {
        let dispatch = dispatch.clone();
        move |_| dispatch(InputEvent::SetKind(kind_signal().get_untracked().toggled()))
    };

    let window_size = config.window_size;
    let (scrollbar_width, scrollbar_height) = config.scrollbar_dimensions(config.kind);

    view! {
        <div class="paged-chart">
            <div
                class="paged-chart-surfaces"
                style="display: flex; gap: 4px;"
                style:flex-direction=move || match kind_signal().get() {
                    ChartKind::Line => "column",
                    ChartKind::Bar => "row",
                }
            >
                <div style=format!("position: relative; width: {}px; height: {}px;", config.chart_width, config.chart_height)>
                    <canvas
                        node_ref=chart_ref
                        width=config.chart_width
                        height=config.chart_height
                        on:wheel=on_wheel
                    />
                </div>
                <canvas
                    node_ref=scrollbar_ref
                    width=scrollbar_width
                    height=scrollbar_height
                    style:cursor=move || if dragging_signal().get() { "grabbing" } else { "grab" }
                    on:mousedown=on_scrollbar_down
                />
            </div>
            <div class="paged-chart-controls" style="display: flex; gap: 8px; margin-top: 8px; align-items: center;">
                <button on:click=on_prev>"◀ Prev"</button>
                <button on:click=on_next>"Next ▶"</button>
                <button on:click=on_toggle>
                    {move || format!("Show as {}", kind_signal().get().toggled())}
                </button>
                <span>
                    {move || window_caption(
                        offset_signal().get(),
                        window_size,
                        dataset_len_signal().get(),
                        page_signal().get(),
                        page_count_signal().get(),
                    )}
                </span>
            </div>
            <div class="paged-chart-status">{move || status_signal().get()}</div>
        </div>
    }
}
