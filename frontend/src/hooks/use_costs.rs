use std::rc::Rc;

use shared::{ApiError, CostEntry, CostsParams, CostsService, FetchSequence, FetchTicket, LedgerState};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;

/// Reducer wrapper; a response is applied against whatever request is
/// current when it arrives, not when it was sent.
#[derive(Clone, Debug, PartialEq)]
pub struct LedgerStore(pub LedgerState);

pub enum LedgerAction {
    Started(FetchTicket),
    Finished(FetchTicket, Result<Vec<CostEntry>, ApiError>),
}

impl Reducible for LedgerStore {
    type Action = LedgerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut ledger = self.0.clone();
        match action {
            LedgerAction::Started(ticket) => ledger.start(ticket),
            LedgerAction::Finished(ticket, result) => {
                ledger.apply(ticket, result);
            }
        }
        Rc::new(LedgerStore(ledger))
    }
}

/// Single-flight latch for the add-cost request. Lives in a `use_mut_ref`
/// so a second click sees the first one before any re-render.
#[derive(Debug, Default)]
pub struct InFlight(bool);

impl InFlight {
    /// Claim the slot; false while a request is already out
    pub fn try_begin(&mut self) -> bool {
        !std::mem::replace(&mut self.0, true)
    }

    pub fn finish(&mut self) {
        self.0 = false;
    }
}

#[derive(Clone)]
pub struct CostsState {
    pub params: CostsParams,
    pub entries: Vec<CostEntry>,
    pub total: f64,
    pub loading: bool,
    pub fallback: bool,

    // Add cost modal state
    pub show_add_modal: bool,
    pub item: String,
    pub cost: String,
    pub submitting: bool,
    pub form_error: Option<String>,
}

pub struct UseCostsResult {
    pub state: CostsState,
    pub actions: UseCostsActions,
}

#[derive(Clone)]
pub struct UseCostsActions {
    pub open_add_modal: Callback<()>,
    pub close_add_modal: Callback<()>,
    pub on_item_input: Callback<InputEvent>,
    pub on_cost_input: Callback<InputEvent>,
    pub submit: Callback<()>,
}

#[hook]
pub fn use_costs(service: &CostsService<ApiClient>, params: CostsParams) -> UseCostsResult {
    let ledger = use_reducer(|| LedgerStore(LedgerState::new(params)));
    let sequence = use_mut_ref(FetchSequence::new);

    let show_add_modal = use_state(|| false);
    let item = use_state(String::new);
    let cost = use_state(String::new);
    let submitting = use_state(|| false);
    let in_flight = use_mut_ref(InFlight::default);
    let form_error = use_state(|| None::<String>);

    // One read per call; the ticket lets the reducer drop late responses
    let refresh = {
        let dispatcher = ledger.dispatcher();
        use_callback(
            (params, service.clone()),
            move |_: (), (params, service)| {
                let ticket = sequence.borrow_mut().next(*params);
                dispatcher.dispatch(LedgerAction::Started(ticket));

                let service = service.clone();
                let dispatcher = dispatcher.clone();
                spawn_local(async move {
                    let result = service.fetch(ticket).await;
                    dispatcher.dispatch(LedgerAction::Finished(ticket, result));
                });
            },
        )
    };

    // Fetch on mount and whenever the month/year changes
    use_effect_with(params, {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let open_add_modal = {
        let show_add_modal = show_add_modal.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: ()| {
            form_error.set(None);
            show_add_modal.set(true);
        })
    };

    let close_add_modal = {
        let show_add_modal = show_add_modal.clone();
        let item = item.clone();
        let cost = cost.clone();
        let form_error = form_error.clone();
        Callback::from(move |_: ()| {
            show_add_modal.set(false);
            item.set(String::new());
            cost.set(String::new());
            form_error.set(None);
        })
    };

    let on_item_input = {
        let item = item.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            item.set(input.value());
            form_error.set(None);
        })
    };

    let on_cost_input = {
        let cost = cost.clone();
        let form_error = form_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cost.set(input.value());
            form_error.set(None);
        })
    };

    let submit = {
        let service = service.clone();
        let item = item.clone();
        let cost = cost.clone();
        let show_add_modal = show_add_modal.clone();
        let submitting = submitting.clone();
        let form_error = form_error.clone();
        let refresh = refresh.clone();

        Callback::from(move |_: ()| {
            if !in_flight.borrow_mut().try_begin() {
                log::debug!("Add cost already in flight, ignoring submit");
                return;
            }
            form_error.set(None);
            submitting.set(true);

            let service = service.clone();
            let item = item.clone();
            let cost = cost.clone();
            let show_add_modal = show_add_modal.clone();
            let submitting = submitting.clone();
            let form_error = form_error.clone();
            let refresh = refresh.clone();
            let in_flight = in_flight.clone();

            spawn_local(async move {
                match service.submit(params, &item, &cost).await {
                    Ok(_request) => {
                        item.set(String::new());
                        cost.set(String::new());
                        show_add_modal.set(false);
                        refresh.emit(());
                    }
                    Err(error) => {
                        form_error.set(Some(error.to_string()));
                    }
                }

                in_flight.borrow_mut().finish();
                submitting.set(false);
            });
        })
    };

    let state = CostsState {
        params: ledger.0.params(),
        entries: ledger.0.entries().to_vec(),
        total: ledger.0.total(),
        loading: ledger.0.is_loading(),
        fallback: ledger.0.is_fallback(),
        show_add_modal: *show_add_modal,
        item: (*item).clone(),
        cost: (*cost).clone(),
        submitting: *submitting,
        form_error: (*form_error).clone(),
    };

    let actions = UseCostsActions {
        open_add_modal,
        close_add_modal,
        on_item_input,
        on_cost_input,
        submit,
    };

    UseCostsResult { state, actions }
}
