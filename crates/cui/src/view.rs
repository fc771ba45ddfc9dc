use crate::app::{App, InputMode};
use crate::layout::{
    centered_rect, detail_close_rect, detail_rect, panes, toolbar_label, Panes, ToolbarButton,
    TILE_W, TOOLBAR,
};
use crate::theme::{palette, Palette};
use arcanum_core::{TileFace, NO_CONTEXT};
use ratatui::layout::Rect;
use ratatui::prelude::{Line, Modifier, Span, Style, Stylize};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const APP_TITLE: &str = "Arcanum - Lectura de Tarot";

pub fn draw(frame: &mut Frame, app: &App) {
    let p = palette(app.theme());
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(p.bg).fg(p.fg)),
        area,
    );
    let layout: Panes = panes(area);

    draw_header(frame, layout.header, app, &p);
    draw_toolbar(frame, layout.toolbar, app, &p);
    draw_grid(frame, app, &p);
    draw_context(frame, layout.context, app, &p);
    draw_prompt(frame, layout.prompt, app, &p);
    draw_log(frame, layout.log, app, &p);
    draw_footer(frame, layout.footer, app, &p);

    if app.session.detail().is_some() {
        draw_detail_popup(frame, app, &p);
    }
    if app.show_help {
        draw_help_popup(frame, &p);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let mode = app.session.mode();
    let title = Line::from(vec![
        Span::from(APP_TITLE).bold().fg(p.accent),
        Span::from(format!(
            "  semilla {}  {}",
            app.session.seed(),
            app.theme().icon()
        ))
        .fg(p.muted),
    ]);
    let status_style = if app.status_is_error {
        Style::default().fg(p.error)
    } else {
        Style::default().fg(p.fg)
    };
    let pending = app.session.pending_picks();
    let mut summary = vec![
        Span::from(app.session.status_label()).bold(),
        Span::from(format!("  {} ({})  ", mode.description(), mode.limit())).fg(p.muted),
    ];
    if pending > 0 {
        summary.push(Span::from(format!("[{pending} pendientes]  ")).fg(p.accent));
    }
    summary.push(Span::styled(app.status_line.clone(), status_style));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.border));
    frame.render_widget(
        Paragraph::new(vec![title, Line::from(summary)]).block(block),
        area,
    );
}

fn draw_toolbar(frame: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let current = app.session.mode();
    let mut spans = Vec::with_capacity(TOOLBAR.len() * 2);
    for button in TOOLBAR {
        let label = toolbar_label(button, app.theme(), app.session.show_names());
        let style = match button {
            ToolbarButton::Mode(mode) if mode == current => Style::default()
                .fg(p.bg)
                .bg(p.accent)
                .add_modifier(Modifier::BOLD),
            ToolbarButton::Mode(_) => Style::default().fg(p.fg),
            _ => Style::default().fg(p.accent),
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::from(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_grid(frame: &mut Frame, app: &App, p: &Palette) {
    let geometry = app.grid_geometry();
    let pane = panes(app.viewport).grid;
    let first_row = geometry.scroll_row + 1;
    let last_row = (geometry.scroll_row + geometry.visible_rows).min(geometry.rows());
    let title = format!(
        " Mazo ({} cartas) filas {first_row}-{last_row} de {} ",
        geometry.total,
        geometry.rows()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.border));
    frame.render_widget(block, pane);

    for tile in app.session.tiles() {
        let Some(rect) = geometry.tile_rect(tile.slot) else {
            continue;
        };
        let focused = tile.slot == app.cursor && app.input_mode == InputMode::Grid;
        let border_color = if tile.selected { p.selected } else { p.border };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        if focused {
            block = block
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(p.accent));
        }
        if let TileFace::Up { img, .. } = tile.face {
            let file = img.rsplit('/').next().unwrap_or(img);
            block = block.title(Line::from(file).fg(p.muted));
        }
        let face = match tile.face {
            TileFace::Down => {
                Line::from("▒".repeat(usize::from(TILE_W.saturating_sub(2)))).fg(p.card_back)
            }
            TileFace::Up {
                marker, reversed, ..
            } => {
                let order = tile.reading_index.map(|idx| idx + 1).unwrap_or_default();
                let marker_color = if reversed { p.reversed } else { p.selected };
                Line::from(vec![
                    Span::from(format!("{order}. ")).fg(p.card_face).bold(),
                    Span::from(marker).fg(marker_color).bold(),
                ])
            }
        };
        let caption = Line::from(tile.caption.unwrap_or_default()).fg(p.muted);
        frame.render_widget(Paragraph::new(vec![face, caption]).block(block), rect);
    }
}

fn draw_context(frame: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let editing = app.input_mode == InputMode::Context;
    let (text, style) = if editing {
        (
            format!("{}▏", app.context_input),
            Style::default().fg(p.fg),
        )
    } else if app.session.context().trim().is_empty() {
        (NO_CONTEXT.to_string(), Style::default().fg(p.muted))
    } else {
        (app.session.context().to_string(), Style::default().fg(p.fg))
    };
    let border = if editing { p.accent } else { p.border };
    let block = Block::default()
        .title(" Contexto (c para editar) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(text).style(style).block(block), area);
}

fn draw_prompt(frame: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let block = Block::default()
        .title(" Prompt (g generar, y copiar) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.border));
    let paragraph = match app.session.prompt() {
        Some(prompt) => Paragraph::new(prompt)
            .style(Style::default().fg(p.fg))
            .wrap(Wrap { trim: false })
            .scroll((app.prompt_scroll, 0)),
        None => Paragraph::new("Selecciona cartas y pulsa g para generar el prompt.")
            .style(Style::default().fg(p.muted))
            .wrap(Wrap { trim: true }),
    };
    frame.render_widget(paragraph.block(block), area);
}

fn draw_log(frame: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let capacity = area.height.saturating_sub(2) as usize;
    let start = app.event_log.len().saturating_sub(capacity);
    let lines: Vec<Line<'_>> = app
        .event_log
        .iter()
        .skip(start)
        .map(|line| Line::from(line.as_str()))
        .collect();
    let block = Block::default()
        .title(" Actividad ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.border));
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(p.muted))
            .block(block),
        area,
    );
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, p: &Palette) {
    let hint = match app.input_mode {
        InputMode::Context => "Enter guardar | Esc cancelar | Ctrl+U borrar",
        InputMode::Grid => {
            "espacio elegir | Enter detalle | 1-4 tirada | s mezclar | r azar | g generar | ? ayuda | q salir"
        }
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(p.muted)),
        area,
    );
}

fn draw_detail_popup(frame: &mut Frame, app: &App, p: &Palette) {
    let Some(detail) = app.session.detail() else {
        return;
    };
    let area = detail_rect(frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from(detail.classification.as_str()).fg(p.muted),
        Line::from(""),
        Line::from("Significado normal").bold().fg(p.accent),
        Line::from(detail.keywords_up.as_str()),
        Line::from(""),
        Line::from("Significado invertido").bold().fg(p.reversed),
        Line::from(detail.keywords_rev.as_str()),
        Line::from(""),
        Line::from(format!("Imagen: {}", detail.img)).fg(p.muted),
        Line::from(""),
        Line::from("Esc, x o clic fuera para cerrar").fg(p.muted),
    ];
    let block = Block::default()
        .title(format!(" {} ", detail.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.accent))
        .style(Style::default().bg(p.bg).fg(p.fg));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
    frame.render_widget(
        Paragraph::new("[x]").style(
            Style::default()
                .fg(p.error)
                .add_modifier(Modifier::BOLD),
        ),
        detail_close_rect(area),
    );
}

fn draw_help_popup(frame: &mut Frame, p: &Palette) {
    let area = centered_rect(70, 70, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from("q salir | ? ayuda | flechas/hjkl mover"),
        Line::from("espacio o clic elegir carta | Enter, i o clic derecho detalle"),
        Line::from("doble clic abre el detalle | Esc o x cierra"),
        Line::from("1 2 3 4 tirada de 1, 3, 10 o 13 cartas | m siguiente tirada"),
        Line::from("s mezclar | r selección al azar"),
        Line::from("n mostrar u ocultar nombres | t tema claro/oscuro"),
        Line::from("c contexto | g generar prompt | y copiar prompt"),
        Line::from("RePág/AvPág desplazar el prompt"),
    ];
    let block = Block::default()
        .title(" Ayuda ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.accent))
        .style(Style::default().bg(p.bg).fg(p.fg));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
