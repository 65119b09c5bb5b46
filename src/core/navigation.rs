//! Adapter from validated deep links to the host's router.

use std::rc::Rc;

use crate::core::dispatch::DeepLinkHandler;
use crate::core::error::HandlerError;
use crate::models::{AppRouteData, DeepLinkData, DocumentRoute, MiniApp, PublishParams};

/// Screen transitions the host UI exposes to deep links.
///
/// Methods take `&self`: implementations hold their state behind interior
/// mutability, like the rest of a single-threaded UI.
pub trait Navigator {
    /// Switch to an app's base screen.
    fn open_app(&self, app: MiniApp);
    fn show_documents_list(&self);
    fn show_document(&self, id: i64);
    fn show_drafts(&self);
    fn show_publish(&self, params: &PublishParams);
    fn show_debug(&self);
}

/// Perform exactly one navigator call for `route`.
pub fn navigate_to<N: Navigator + ?Sized>(navigator: &N, route: &AppRouteData) {
    match route {
        AppRouteData::Documents(route) => match route {
            DocumentRoute::DocumentsList => navigator.show_documents_list(),
            DocumentRoute::DocumentDetail { id } => navigator.show_document(*id),
            DocumentRoute::Drafts => navigator.show_drafts(),
            DocumentRoute::Publish(params) => navigator.show_publish(params),
            DocumentRoute::Debug => navigator.show_debug(),
        },
        AppRouteData::PodCollection | AppRouteData::PodEditor | AppRouteData::Frogcrypto => {
            navigator.open_app(route.app());
        }
    }
}

/// Wrap a navigator as a [`DeepLinkManager`](crate::DeepLinkManager) handler.
pub fn create_navigation_handler<N: Navigator + 'static>(navigator: Rc<N>) -> DeepLinkHandler {
    Rc::new(move |data: &DeepLinkData| -> Result<(), HandlerError> {
        log::debug!("navigating to {:?}", data.route);
        navigate_to(navigator.as_ref(), &data.route);
        Ok(())
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::ContentType;
    use std::cell::RefCell;

    /// Navigator that records each call as a string.
    #[derive(Default)]
    pub(crate) struct RecordingNavigator {
        pub(crate) calls: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn open_app(&self, app: MiniApp) {
            self.calls.borrow_mut().push(format!("open_app:{}", app));
        }
        fn show_documents_list(&self) {
            self.calls.borrow_mut().push("documents_list".to_string());
        }
        fn show_document(&self, id: i64) {
            self.calls.borrow_mut().push(format!("document:{}", id));
        }
        fn show_drafts(&self) {
            self.calls.borrow_mut().push("drafts".to_string());
        }
        fn show_publish(&self, params: &PublishParams) {
            let content_type = params
                .content_type
                .as_ref()
                .map(ContentType::as_str)
                .unwrap_or("-");
            self.calls
                .borrow_mut()
                .push(format!("publish:{}", content_type));
        }
        fn show_debug(&self) {
            self.calls.borrow_mut().push("debug".to_string());
        }
    }

    #[test]
    fn test_navigate_to_calls_exactly_once() {
        let cases = [
            (AppRouteData::default(), "documents_list"),
            (
                AppRouteData::Documents(DocumentRoute::DocumentDetail { id: 9 }),
                "document:9",
            ),
            (AppRouteData::Documents(DocumentRoute::Drafts), "drafts"),
            (AppRouteData::Documents(DocumentRoute::Debug), "debug"),
            (
                AppRouteData::Documents(DocumentRoute::Publish(PublishParams {
                    content_type: Some(ContentType::Link),
                    ..Default::default()
                })),
                "publish:link",
            ),
            (AppRouteData::PodCollection, "open_app:pod-collection"),
            (AppRouteData::PodEditor, "open_app:pod-editor"),
            (AppRouteData::Frogcrypto, "open_app:frogcrypto"),
        ];

        for (route, expected) in cases {
            let navigator = RecordingNavigator::default();
            navigate_to(&navigator, &route);
            assert_eq!(*navigator.calls.borrow(), vec![expected.to_string()]);
        }
    }

    #[test]
    fn test_navigation_handler() {
        let navigator = Rc::new(RecordingNavigator::default());
        let handler = create_navigation_handler(Rc::clone(&navigator));

        let data = DeepLinkData::new(AppRouteData::Frogcrypto, "podnet://frogcrypto/");
        assert!(handler(&data).is_ok());
        assert_eq!(*navigator.calls.borrow(), vec!["open_app:frogcrypto"]);
    }
}
