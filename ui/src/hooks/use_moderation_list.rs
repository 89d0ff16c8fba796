use moderation::{
    ControllerError, EndpointConfig, FetchOutcome, ModerationList, Moderated,
};
use serde::de::DeserializeOwned;
use yew::prelude::*;

use crate::auth::BrowserSession;

pub type ScreenList<E> = ModerationList<E, BrowserSession>;

/// Receives a failed fetch together with a callback that retries it.
pub type FetchReport = Callback<(ControllerError, Callback<()>)>;

/// Refetch in the background, reporting a failure with a way to retry.
pub fn spawn_refresh<E>(list: &ScreenList<E>, report: &FetchReport)
where
    E: Moderated + DeserializeOwned + 'static,
{
    let list = list.clone();
    let report = report.clone();
    yew::platform::spawn_local(async move {
        if let FetchOutcome::Failed(e) = list.refresh().await {
            let retry = {
                let list = list.clone();
                let report = report.clone();
                Callback::from(move |()| spawn_refresh(&list, &report))
            };
            report.emit((e, retry));
        }
    });
}

/// A moderation list bound to the lifetime of the calling component.
///
/// The list is fetched on mount and detached on unmount, so responses that
/// arrive after navigating away are dropped. Every state change re-renders
/// the component.
#[hook]
pub fn use_moderation_list<E>(
    config: EndpointConfig,
    report: FetchReport,
) -> ScreenList<E>
where
    E: Moderated + DeserializeOwned + 'static,
{
    let update = use_force_update();
    let list = use_memo((), move |_| {
        ModerationList::build(
            config,
            crate::get_api_client(),
            crate::auth::accessor(),
            jiff::Timestamp::now,
            Some(Box::new(move || update.force_update())),
        )
    });

    {
        let list = (*list).clone();
        use_effect_with((), move |_| {
            spawn_refresh(&list, &report);
            move || list.detach()
        });
    }

    (*list).clone()
}
