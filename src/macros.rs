/// Expands to free functions returning fields of [`crate::global_state::Globals`].
///
/// ```ignore
/// status_signals! {
///     pub offset_signal => offset: usize,
///     kind_signal => chart_kind: ChartKind,
/// }
/// ```
#[macro_export]
macro_rules! status_signals {
    ( $( $vis:vis $name:ident => $field:ident : $ty:ty ),+ $(,)? ) => {
        $(
            $vis fn $name() -> ::leptos::RwSignal<$ty> {
                $crate::global_state::globals().$field
            }
        )+
    };
}
